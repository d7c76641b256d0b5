// Plot sample for one distribution family at its default parameters.
// Prints JSON with the evaluation points, densities and summary statistics:
//   {"key":"...", "name":"...", "kind":"discrete|continuous",
//    "x":[...], "y":[...], "mean":..., "variance":..., "mode":...}
// Non-finite statistics and a missing mode are written as null.
//
// Usage: cargo run --example plot_distribution -- [key] [symbol=value ...]
//   e.g. cargo run --example plot_distribution -- gamma α=3 β=0.5

use distlab::registry;

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| fmt_num(*x)).collect();
    format!("[{}]", inner.join(","))
}

fn fmt_num(x: f64) -> String {
    if x.is_finite() {
        format!("{x:.6}")
    } else {
        "null".to_string()
    }
}

fn main() {
    let mut args = std::env::args().skip(1);
    let key = args.next().unwrap_or_else(|| "normal".to_string());
    let Some(descriptor) = registry::get(&key) else {
        eprintln!("unknown distribution `{key}`; known keys:");
        for d in registry::iter() {
            eprintln!("  {:<18} {}", d.id, d.name);
        }
        std::process::exit(2);
    };

    let mut params = descriptor.default_parameters();
    for arg in args {
        let Some((symbol, value)) = arg.split_once('=') else {
            eprintln!("ignoring `{arg}`: expected symbol=value");
            continue;
        };
        match value.parse::<f64>() {
            Ok(v) => {
                // Clamp like a slider would
                let v = descriptor.parameter(symbol).map_or(v, |p| p.clamp(v));
                params.insert(symbol, v);
            }
            Err(_) => eprintln!("ignoring `{arg}`: `{value}` is not a number"),
        }
    }

    let (sample, stats) = match (descriptor.sample_range(&params), descriptor.statistics(&params)) {
        (Ok(sample), Ok(stats)) => (sample, stats),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{}: {e}", descriptor.name);
            std::process::exit(1);
        }
    };

    println!(
        "{{\"key\":\"{}\",\"name\":\"{}\",\"kind\":\"{}\",\"x\":{},\"y\":{},\"mean\":{},\"variance\":{},\"mode\":{}}}",
        descriptor.id,
        descriptor.name,
        descriptor.kind,
        fmt_arr(&sample.xs),
        fmt_arr(&sample.ys),
        fmt_num(stats.mean),
        fmt_num(stats.variance),
        stats.mode.map_or_else(|| "null".to_string(), fmt_num),
    );
}
