use super::*;
use crate::params::ParameterSet;
use core::f64::consts::PI;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn ascending(xs: &[f64]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

// ======================== Binomial ========================

#[test]
fn binomial_pmf_peak() {
    let b = Binomial::new(20.0, 0.5).unwrap();
    approx_eq(b.density(10.0), 0.1762, 1e-4);
    // Symmetric for p = 0.5
    approx_eq(b.density(7.0), b.density(13.0), 1e-15);
}

#[test]
fn binomial_outside_support() {
    let b = Binomial::new(20.0, 0.5).unwrap();
    assert_eq!(b.density(-1.0), 0.0);
    assert_eq!(b.density(21.0), 0.0);
    assert_eq!(b.density(10.5), 0.0);
}

#[test]
fn binomial_degenerate_p() {
    let b = Binomial::new(5.0, 0.0).unwrap();
    assert_eq!(b.density(0.0), 1.0);
    assert_eq!(b.density(1.0), 0.0);
    let b = Binomial::new(5.0, 1.0).unwrap();
    assert_eq!(b.density(5.0), 1.0);
}

#[test]
fn binomial_statistics() {
    let s = Binomial::new(20.0, 0.5).unwrap().statistics();
    assert_eq!(s.mean, 10.0);
    assert_eq!(s.variance, 5.0);
    assert_eq!(s.mode, Some(10.0));
}

#[test]
fn binomial_invalid() {
    assert_eq!(Binomial::new(2.5, 0.5), Err(StatsError::InvalidParameter("n")));
    assert_eq!(Binomial::new(-1.0, 0.5), Err(StatsError::InvalidParameter("n")));
    assert_eq!(Binomial::new(10.0, 1.5), Err(StatsError::InvalidParameter("p")));
    assert_eq!(Binomial::new(f64::NAN, 0.5), Err(StatsError::NonFiniteParameter("n")));
}

#[test]
fn binomial_range() {
    let s = Binomial::new(20.0, 0.3).unwrap().sample_range();
    assert_eq!(s.xs, (0..=20).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn binomial_large_n_stays_finite() {
    // C(2000, 1000) overflows f64
    let b = Binomial::new(2000.0, 0.5).unwrap();
    let peak = b.density(1000.0);
    assert!(((peak - 0.01783901114585437) / 0.01783901114585437).abs() < 1e-9, "peak = {peak}");
    let total: f64 = (0..=2000).map(|x| b.density(x as f64)).sum();
    approx_eq(total, 1.0, 1e-9);
}

#[test]
fn binomial_huge_n_has_empty_grid() {
    let b = Binomial::new(1e20, 0.5).unwrap();
    assert!(b.sample_points().is_empty());
    assert!(!b.density(5e19).is_nan());
}

// ======================== Geometric ========================

#[test]
fn geometric_pmf() {
    let g = Geometric::new(0.3).unwrap();
    approx_eq(g.density(0.0), 0.3, 1e-15);
    approx_eq(g.density(2.0), 0.3 * 0.49, 1e-15);
    assert_eq!(g.density(1.5), 0.0);
    assert_eq!(g.density(-1.0), 0.0);
}

#[test]
fn geometric_statistics() {
    let s = Geometric::new(0.3).unwrap().statistics();
    approx_eq(s.mean, 0.7 / 0.3, 1e-14);
    approx_eq(s.variance, 0.7 / 0.09, 1e-12);
    assert_eq!(s.mode, Some(0.0));
}

#[test]
fn geometric_range_capped() {
    // ⌈10/0.5⌉ = 20
    assert_eq!(Geometric::new(0.5).unwrap().sample_points().len(), 21);
    // ⌈10/0.05⌉ = 200, capped at 100
    let xs = Geometric::new(0.05).unwrap().sample_points();
    assert_eq!(xs.len(), 101);
    assert_eq!(xs.last(), Some(&100.0));
}

#[test]
fn geometric_invalid() {
    assert_eq!(Geometric::new(0.0), Err(StatsError::InvalidParameter("p")));
    assert_eq!(Geometric::new(1.1), Err(StatsError::InvalidParameter("p")));
    assert!(Geometric::new(1.0).is_ok());
}

// ======================== Hypergeometric ========================

#[test]
fn hypergeometric_outside_support() {
    let h = Hypergeometric::new(100.0, 30.0, 20.0).unwrap();
    assert_eq!(h.density(-1.0), 0.0);
    assert_eq!(h.density(21.0), 0.0);
    assert_eq!(h.density(3.5), 0.0);

    // Support starts at n − (N − K) = 3
    let h = Hypergeometric::new(10.0, 8.0, 5.0).unwrap();
    assert_eq!(h.density(2.0), 0.0);
    assert!(h.density(3.0) > 0.0);
    assert_eq!(h.density(6.0), 0.0);
}

#[test]
fn hypergeometric_pmf_small() {
    // N=10, K=4, n=3: P(X=1) = C(4,1)C(6,2)/C(10,3) = 4·15/120
    let h = Hypergeometric::new(10.0, 4.0, 3.0).unwrap();
    approx_eq(h.density(1.0), 0.5, 1e-14);
}

#[test]
fn hypergeometric_statistics() {
    let s = Hypergeometric::new(100.0, 30.0, 20.0).unwrap().statistics();
    approx_eq(s.mean, 6.0, 1e-14);
    approx_eq(s.variance, 20.0 * 30.0 * 70.0 * 80.0 / (10000.0 * 99.0), 1e-12);
    assert_eq!(s.mode, Some(6.0));
}

#[test]
fn hypergeometric_floors_parameters() {
    let h = Hypergeometric::new(100.9, 30.7, 20.2).unwrap();
    assert_eq!(h, Hypergeometric::new(100.0, 30.0, 20.0).unwrap());
}

#[test]
fn hypergeometric_range() {
    let h = Hypergeometric::new(10.0, 8.0, 5.0).unwrap();
    assert_eq!(h.sample_points(), vec![3.0, 4.0, 5.0]);
    assert_eq!(Hypergeometric::new(100.0, 30.0, 20.0).unwrap().sample_points().len(), 21);
}

#[test]
fn hypergeometric_invalid() {
    assert_eq!(Hypergeometric::new(0.5, 0.0, 0.0), Err(StatsError::InvalidParameter("N")));
    assert_eq!(Hypergeometric::new(10.0, 11.0, 5.0), Err(StatsError::InvalidParameter("K")));
    assert_eq!(Hypergeometric::new(10.0, 5.0, 11.0), Err(StatsError::InvalidParameter("n")));
}

#[test]
fn hypergeometric_large_population() {
    let h = Hypergeometric::new(4000.0, 2000.0, 1000.0).unwrap();
    let y = h.density(500.0);
    assert!(((y - 0.029126735257761903) / 0.029126735257761903).abs() < 1e-9, "y = {y}");

    let h = Hypergeometric::new(1e20, 5e19, 1e19).unwrap();
    assert!(h.sample_points().is_empty());
    let h = Hypergeometric::new(1e17, 30.0, 20.0).unwrap();
    assert_eq!(h.sample_points().len(), 21);
    for (x, y) in h.sample_range().iter() {
        assert!(y.is_finite() && y >= 0.0, "density({x}) = {y}");
    }
}

// ======================== Negative binomial ========================

#[test]
fn negative_binomial_pmf() {
    // r=1 reduces to geometric
    let nb = NegativeBinomial::new(1.0, 0.3).unwrap();
    let g = Geometric::new(0.3).unwrap();
    for x in 0..10 {
        approx_eq(nb.density(x as f64), g.density(x as f64), 1e-15);
    }
    // r=3, p=0.5, x=2: C(4,2)/32
    let nb = NegativeBinomial::new(3.0, 0.5).unwrap();
    approx_eq(nb.density(2.0), 6.0 / 32.0, 1e-15);
    assert_eq!(nb.density(2.5), 0.0);
}

#[test]
fn negative_binomial_statistics() {
    let s = NegativeBinomial::new(3.0, 0.5).unwrap().statistics();
    assert_eq!(s.mean, 3.0);
    assert_eq!(s.variance, 6.0);
    assert_eq!(s.mode, Some(2.0));
    // Mode clamps at zero for r = 1
    assert_eq!(NegativeBinomial::new(1.0, 0.5).unwrap().mode(), Some(0.0));
}

#[test]
fn negative_binomial_range() {
    // ⌈10·2/0.5⌉ = 40
    assert_eq!(NegativeBinomial::new(2.0, 0.5).unwrap().sample_points().len(), 41);
    assert_eq!(NegativeBinomial::new(5.0, 0.1).unwrap().sample_points().len(), 101);
}

#[test]
fn negative_binomial_invalid() {
    assert_eq!(NegativeBinomial::new(0.0, 0.5), Err(StatsError::InvalidParameter("r")));
    assert_eq!(NegativeBinomial::new(1.5, 0.5), Err(StatsError::InvalidParameter("r")));
    assert_eq!(NegativeBinomial::new(3.0, 0.0), Err(StatsError::InvalidParameter("p")));
}

#[test]
fn negative_binomial_overflowing_coefficient() {
    let nb = NegativeBinomial::new(1500.0, 0.5).unwrap();
    let y = nb.density(2000.0);
    assert!(((y - 1.5946496546790893e-18) / 1.5946496546790893e-18).abs() < 1e-8, "y = {y}");
    let nb = NegativeBinomial::new(1e10, 0.4).unwrap();
    for (x, y) in nb.sample_range().iter() {
        assert!(!y.is_nan() && y >= 0.0, "density({x}) = {y}");
    }
}

// ======================== Uniform discrete ========================

#[test]
fn uniform_discrete_pmf() {
    let u = UniformDiscrete::new(1.0, 10.0).unwrap();
    assert_eq!(u.density(5.0), 0.1);
    assert_eq!(u.density(11.0), 0.0);
    assert_eq!(u.density(0.0), 0.0);
    assert_eq!(u.density(5.5), 0.0);
}

#[test]
fn uniform_discrete_statistics() {
    let s = UniformDiscrete::new(1.0, 10.0).unwrap().statistics();
    assert_eq!(s.mean, 5.5);
    assert_eq!(s.variance, 99.0 / 12.0);
    assert_eq!(s.mode, None);
}

#[test]
fn uniform_discrete_single_point() {
    // Floors to {1}
    let u = UniformDiscrete::new(1.7, 1.2).unwrap();
    assert_eq!(u.density(1.0), 1.0);
    assert_eq!(u.variance(), 0.0);
    assert_eq!(u.sample_points(), vec![1.0]);
}

#[test]
fn uniform_discrete_invalid() {
    assert_eq!(UniformDiscrete::new(5.0, 3.0), Err(StatsError::InvalidParameter("b")));
}

#[test]
fn uniform_discrete_huge_span_has_empty_grid() {
    assert!(UniformDiscrete::new(0.0, 1e12).unwrap().sample_points().is_empty());
}

// ======================== Normal ========================

#[test]
fn normal_pdf_standard() {
    let n = Normal::new(0.0, 1.0).unwrap();
    let expected = 1.0 / (2.0 * PI).sqrt();
    approx_eq(n.density(0.0), expected, 1e-14);
    approx_eq(n.density(1.0), expected * (-0.5_f64).exp(), 1e-14);
}

#[test]
fn normal_statistics() {
    let s = Normal::new(3.0, 2.0).unwrap().statistics();
    assert_eq!(s.mean, 3.0);
    assert_eq!(s.variance, 4.0);
    assert_eq!(s.mode, Some(3.0));
    assert_eq!(s.std_dev(), 2.0);
}

#[test]
fn normal_range() {
    let xs = Normal::new(0.0, 1.0).unwrap().sample_points();
    // −4..=4 by 0.1; accumulated rounding may drop the endpoint
    assert!(xs.len() == 80 || xs.len() == 81, "len = {}", xs.len());
    assert_eq!(xs[0], -4.0);
    assert!(ascending(&xs));
    assert!(*xs.last().unwrap() <= 4.0);
}

#[test]
fn normal_invalid() {
    assert_eq!(Normal::new(0.0, 0.0), Err(StatsError::InvalidParameter("σ")));
    assert_eq!(Normal::new(0.0, -1.0), Err(StatsError::InvalidParameter("σ")));
    assert_eq!(Normal::new(f64::INFINITY, 1.0), Err(StatsError::NonFiniteParameter("μ")));
}

// ======================== Uniform ========================

#[test]
fn uniform_pdf() {
    let u = Uniform::new(2.0, 6.0).unwrap();
    assert_eq!(u.density(2.0), 0.25);
    assert_eq!(u.density(6.0), 0.25);
    assert_eq!(u.density(1.9), 0.0);
    assert_eq!(u.density(6.1), 0.0);
}

#[test]
fn uniform_statistics() {
    let s = Uniform::new(0.0, 12.0).unwrap().statistics();
    assert_eq!(s.mean, 6.0);
    assert_eq!(s.variance, 12.0);
    assert_eq!(s.mode, None);
}

#[test]
fn uniform_range_flat() {
    let s = Uniform::new(0.0, 10.0).unwrap().sample_range();
    assert!(s.len() == 100 || s.len() == 101);
    assert!(s.ys.iter().all(|&y| y == 0.1));
}

#[test]
fn uniform_invalid() {
    assert_eq!(Uniform::new(1.0, 1.0), Err(StatsError::InvalidParameter("b")));
    assert_eq!(Uniform::new(2.0, 1.0), Err(StatsError::InvalidParameter("b")));
}

// ======================== Triangular ========================

#[test]
fn triangular_pdf() {
    let t = Triangular::new(0.0, 10.0, 5.0).unwrap();
    assert_eq!(t.density(5.0), 0.2);
    approx_eq(t.density(2.5), 0.1, 1e-15);
    approx_eq(t.density(7.5), 0.1, 1e-15);
    assert_eq!(t.density(-0.1), 0.0);
    assert_eq!(t.density(10.1), 0.0);
}

#[test]
fn triangular_peak_at_bound() {
    // c = a: the rising edge is empty
    let t = Triangular::new(0.0, 10.0, 0.0).unwrap();
    assert_eq!(t.density(0.0), 0.2);
    approx_eq(t.density(5.0), 0.1, 1e-15);
    assert_eq!(t.density(10.0), 0.0);
}

#[test]
fn triangular_statistics() {
    let s = Triangular::new(0.0, 10.0, 5.0).unwrap().statistics();
    assert_eq!(s.mean, 5.0);
    approx_eq(s.variance, 75.0 / 18.0, 1e-14);
    assert_eq!(s.mode, Some(5.0));
}

#[test]
fn triangular_invalid() {
    assert_eq!(Triangular::new(5.0, 5.0, 5.0), Err(StatsError::InvalidParameter("b")));
    assert_eq!(Triangular::new(0.0, 10.0, 11.0), Err(StatsError::InvalidParameter("c")));
    assert_eq!(Triangular::new(0.0, 10.0, -1.0), Err(StatsError::InvalidParameter("c")));
}

// ======================== Logistic ========================

#[test]
fn logistic_pdf() {
    let l = Logistic::new(0.0, 1.0).unwrap();
    assert_eq!(l.density(0.0), 0.25);
    approx_eq(l.density(2.0), l.density(-2.0), 1e-16);
    // Far tails underflow to zero rather than NaN
    assert_eq!(l.density(1000.0), 0.0);
    assert_eq!(l.density(-1000.0), 0.0);
}

#[test]
fn logistic_statistics() {
    let s = Logistic::new(1.0, 2.0).unwrap().statistics();
    assert_eq!(s.mean, 1.0);
    approx_eq(s.variance, PI * PI * 4.0 / 3.0, 1e-13);
    assert_eq!(s.mode, Some(1.0));
}

#[test]
fn logistic_range() {
    let xs = Logistic::new(0.0, 1.0).unwrap().sample_points();
    assert_eq!(xs[0], -5.0);
    assert!(xs.len() == 100 || xs.len() == 101);
}

// ======================== Cauchy ========================

#[test]
fn cauchy_pdf() {
    let c = Cauchy::new(3.0, 2.0).unwrap();
    approx_eq(c.density(3.0), 1.0 / (2.0 * PI), 1e-15);
    approx_eq(c.density(5.0), 1.0 / (4.0 * PI), 1e-15);
}

#[test]
fn cauchy_statistics_undefined() {
    let s = Cauchy::new(3.0, 1.0).unwrap().statistics();
    assert!(s.mean.is_nan());
    assert!(s.variance.is_nan());
    assert_eq!(s.mode, Some(3.0));
}

#[test]
fn cauchy_invalid() {
    assert_eq!(Cauchy::new(0.0, 0.0), Err(StatsError::InvalidParameter("γ")));
}

// ======================== Exponential ========================

#[test]
fn exponential_statistics() {
    let s = Exponential::new(2.0).unwrap().statistics();
    assert_eq!(s, Statistics { mean: 0.5, variance: 0.25, mode: Some(0.0) });
}

#[test]
fn exponential_pdf() {
    let e = Exponential::new(2.0).unwrap();
    assert_eq!(e.density(0.0), 2.0);
    approx_eq(e.density(1.0), 2.0 * (-2.0_f64).exp(), 1e-15);
    assert_eq!(e.density(-0.1), 0.0);
}

#[test]
fn exponential_range() {
    let xs = Exponential::new(2.0).unwrap().sample_points();
    assert_eq!(xs[0], 0.0);
    assert!(xs.len() == 25 || xs.len() == 26);
    assert!(*xs.last().unwrap() <= 2.5);
}

#[test]
fn exponential_invalid() {
    assert_eq!(Exponential::new(0.0), Err(StatsError::InvalidParameter("λ")));
    assert_eq!(Exponential::new(f64::NAN), Err(StatsError::NonFiniteParameter("λ")));
}

// ======================== Lognormal ========================

#[test]
fn lognormal_pdf() {
    let l = Lognormal::new(0.0, 1.0).unwrap();
    approx_eq(l.density(1.0), 1.0 / (2.0 * PI).sqrt(), 1e-14);
    assert_eq!(l.density(0.0), 0.0);
    assert_eq!(l.density(-1.0), 0.0);
}

#[test]
fn lognormal_statistics() {
    let s = Lognormal::new(0.0, 1.0).unwrap().statistics();
    let e = 1.0_f64.exp();
    approx_eq(s.mean, e.sqrt(), 1e-14);
    approx_eq(s.variance, (e - 1.0) * e, 1e-13);
    approx_eq(s.mode.unwrap(), 1.0 / e, 1e-15);
}

#[test]
fn lognormal_range() {
    let xs = Lognormal::new(0.0, 1.0).unwrap().sample_points();
    assert_eq!(xs[0], 0.01);
    assert!((199..=201).contains(&xs.len()), "len = {}", xs.len());
    assert!(*xs.last().unwrap() <= 4.0_f64.exp());
}

// ======================== Gamma ========================

#[test]
fn gamma_pdf() {
    // α=1 is Exponential(β)
    let g = Gamma::new(1.0, 2.0).unwrap();
    let e = Exponential::new(2.0).unwrap();
    approx_eq(g.density(0.7), e.density(0.7), 1e-13);
    assert_eq!(g.density(0.0), 0.0);
    assert_eq!(g.density(-1.0), 0.0);
}

#[test]
fn gamma_pdf_past_gamma_overflow() {
    // Γ(200) overflows f64
    let g = Gamma::new(200.0, 1.0).unwrap();
    let y = g.density(150.0);
    assert!(((y - 2.0050703837709614e-5) / 2.0050703837709614e-5).abs() < 1e-9, "y = {y}");
    let g = Gamma::new(200.0, 30.0).unwrap();
    approx_eq(g.density(199.0 / 30.0), 0.8480528483019354, 1e-9);
    for (x, y) in g.sample_range().iter() {
        assert!(y.is_finite() && y >= 0.0, "density({x}) = {y}");
    }
}

#[test]
fn gamma_statistics() {
    let s = Gamma::new(3.0, 2.0).unwrap().statistics();
    assert_eq!(s.mean, 1.5);
    assert_eq!(s.variance, 0.75);
    assert_eq!(s.mode, Some(1.0));
    assert_eq!(Gamma::new(0.5, 1.0).unwrap().mode(), Some(0.0));
}

#[test]
fn gamma_range() {
    let xs = Gamma::new(2.0, 1.0).unwrap().sample_points();
    assert_eq!(xs[0], 0.0);
    assert!((200..=201).contains(&xs.len()), "len = {}", xs.len());
    assert!(*xs.last().unwrap() <= 8.0);
}

#[test]
fn gamma_invalid() {
    assert_eq!(Gamma::new(0.0, 1.0), Err(StatsError::InvalidParameter("α")));
    assert_eq!(Gamma::new(1.0, -1.0), Err(StatsError::InvalidParameter("β")));
}

// ======================== Weibull ========================

#[test]
fn weibull_at_zero() {
    assert_eq!(Weibull::new(1.0, 0.5).unwrap().density(0.0), f64::INFINITY);
    assert_eq!(Weibull::new(2.0, 1.0).unwrap().density(0.0), 0.5);
    assert_eq!(Weibull::new(1.0, 2.0).unwrap().density(0.0), 0.0);
    assert_eq!(Weibull::new(1.0, 0.5).unwrap().density(-0.1), 0.0);
}

#[test]
fn weibull_pdf() {
    // k=1 is Exponential(1/λ)
    let w = Weibull::new(2.0, 1.0).unwrap();
    approx_eq(w.density(1.0), 0.5 * (-0.5_f64).exp(), 1e-15);
    // k=2, λ=1: 2x e^{−x²}
    let w = Weibull::new(1.0, 2.0).unwrap();
    approx_eq(w.density(0.5), (-0.25_f64).exp(), 1e-15);
}

#[test]
fn weibull_statistics() {
    let s = Weibull::new(1.0, 1.0).unwrap().statistics();
    approx_eq(s.mean, 1.0, 1e-12);
    approx_eq(s.variance, 1.0, 1e-12);
    assert_eq!(s.mode, Some(0.0));

    let s = Weibull::new(1.0, 2.0).unwrap().statistics();
    approx_eq(s.mean, PI.sqrt() / 2.0, 1e-12);
    approx_eq(s.variance, 1.0 - PI / 4.0, 1e-12);
    approx_eq(s.mode.unwrap(), 0.5_f64.sqrt(), 1e-15);
}

#[test]
fn weibull_range() {
    let xs = Weibull::new(1.0, 2.0).unwrap().sample_points();
    assert_eq!(xs[0], 0.0);
    assert!((200..=201).contains(&xs.len()), "len = {}", xs.len());
}

#[test]
fn weibull_invalid() {
    assert_eq!(Weibull::new(0.0, 1.0), Err(StatsError::InvalidParameter("λ")));
    assert_eq!(Weibull::new(1.0, 0.0), Err(StatsError::InvalidParameter("k")));
}

#[test]
fn weibull_huge_shape() {
    let w = Weibull::new(1.0, 1e10).unwrap();
    assert_eq!(w.density(2.0), 0.0);
    assert_eq!(w.density(0.5), 0.0);
    for (x, y) in w.sample_range().iter() {
        assert!(!y.is_nan(), "density({x}) = {y}");
    }
}

// ======================== Minimum extreme ========================

#[test]
fn minimum_extreme_pdf() {
    let g = MinimumExtreme::new(0.0, 2.0).unwrap();
    approx_eq(g.density(0.0), 0.5 * (-1.0_f64).exp(), 1e-15);
    // Left-skewed: heavier mass below the mode
    assert!(g.density(-2.0) > g.density(2.0));
    assert_eq!(g.density(1e4), 0.0);
    assert_eq!(g.density(-1e4), 0.0);
}

#[test]
fn minimum_extreme_statistics() {
    let s = MinimumExtreme::new(1.0, 2.0).unwrap().statistics();
    approx_eq(s.mean, 1.0 - 2.0 * crate::special::EULER_MASCHERONI, 1e-15);
    approx_eq(s.variance, PI * PI * 4.0 / 6.0, 1e-13);
    assert_eq!(s.mode, Some(1.0));
}

// ======================== Parameter sets ========================

#[test]
fn from_params_canonical_symbols() {
    let b = Binomial::from_params(&ParameterSet::from([("n", 20.0), ("p", 0.5)])).unwrap();
    assert_eq!(b, Binomial::new(20.0, 0.5).unwrap());
    let h = Hypergeometric::from_params(&ParameterSet::from([("N", 100.0), ("K", 30.0), ("n", 20.0)]))
        .unwrap();
    assert_eq!(h.mean(), 6.0);
}

#[test]
fn from_params_missing_required() {
    assert_eq!(
        Binomial::from_params(&ParameterSet::from([("p", 0.5)])),
        Err(StatsError::MissingParameter("n"))
    );
    assert_eq!(
        Triangular::from_params(&ParameterSet::from([("a", 0.0), ("b", 1.0)])),
        Err(StatsError::MissingParameter("c"))
    );
}

#[test]
fn from_params_alias_tiers() {
    // Symbol beats every alias
    let n = Normal::from_params(&ParameterSet::from([("μ", 1.0), ("mu", 2.0), ("mean", 3.0)])).unwrap();
    assert_eq!(n.mean(), 1.0);
    // First alias beats the second
    let n = Normal::from_params(&ParameterSet::from([("mu", 2.0), ("mean", 3.0)])).unwrap();
    assert_eq!(n.mean(), 2.0);
    let n = Normal::from_params(&ParameterSet::from([("mean", 3.0), ("stdDev", 2.0)])).unwrap();
    assert_eq!(n.mean(), 3.0);
    assert_eq!(n.variance(), 4.0);
    // Fallback literal
    assert_eq!(Normal::from_params(&ParameterSet::new()).unwrap(), Normal::new(0.0, 1.0).unwrap());
}

#[test]
fn from_params_aliases_per_family() {
    let c = Cauchy::from_params(&ParameterSet::from([("location", 2.0), ("scale", 3.0)])).unwrap();
    assert_eq!(c, Cauchy::new(2.0, 3.0).unwrap());
    let c = Cauchy::from_params(&ParameterSet::from([("x0", 1.0), ("gamma", 0.5)])).unwrap();
    assert_eq!(c, Cauchy::new(1.0, 0.5).unwrap());

    let e = Exponential::from_params(&ParameterSet::from([("rate", 4.0)])).unwrap();
    assert_eq!(e.mean(), 0.25);

    let g = Gamma::from_params(&ParameterSet::from([("shape", 3.0), ("rate", 2.0)])).unwrap();
    assert_eq!(g, Gamma::new(3.0, 2.0).unwrap());
    let g = Gamma::from_params(&ParameterSet::from([("alpha", 4.0)])).unwrap();
    assert_eq!(g, Gamma::new(4.0, 1.0).unwrap());

    let w = Weibull::from_params(&ParameterSet::from([("scale", 2.0), ("shape", 3.0)])).unwrap();
    assert_eq!(w, Weibull::new(2.0, 3.0).unwrap());

    let m = MinimumExtreme::from_params(&ParameterSet::from([("location", 1.0), ("beta", 2.0)])).unwrap();
    assert_eq!(m, MinimumExtreme::new(1.0, 2.0).unwrap());

    let l = Logistic::from_params(&ParameterSet::from([("mean", 1.0), ("scale", 2.0)])).unwrap();
    assert_eq!(l, Logistic::new(1.0, 2.0).unwrap());

    let l = Lognormal::from_params(&ParameterSet::from([("mu", 0.5), ("sigma", 0.25)])).unwrap();
    assert_eq!(l, Lognormal::new(0.5, 0.25).unwrap());
}

#[test]
fn from_params_fallbacks() {
    assert_eq!(Gamma::from_params(&ParameterSet::new()).unwrap(), Gamma::new(2.0, 1.0).unwrap());
    assert_eq!(Weibull::from_params(&ParameterSet::new()).unwrap(), Weibull::new(1.0, 2.0).unwrap());
    assert_eq!(Exponential::from_params(&ParameterSet::new()).unwrap(), Exponential::new(1.0).unwrap());
}

#[test]
fn from_params_non_finite() {
    assert_eq!(
        Exponential::from_params(&ParameterSet::from([("lambda", f64::NAN)])),
        Err(StatsError::NonFiniteParameter("λ"))
    );
}

// ======================== Statistics display ========================

#[test]
fn statistics_display() {
    let s = Exponential::new(2.0).unwrap().statistics();
    assert_eq!(s.to_string(), "mean: 0.500, variance: 0.250, mode: 0.000");
    let s = Uniform::new(0.0, 1.0).unwrap().statistics();
    assert_eq!(s.to_string(), "mean: 0.500, variance: 0.083, mode: N/A");
    let s = Cauchy::new(3.0, 1.0).unwrap().statistics();
    assert_eq!(s.to_string(), "mean: N/A, variance: N/A, mode: 3.000");
}

// ======================== Sample ranges ========================

#[test]
fn sample_range_matches_density() {
    let t = Triangular::new(-1.0, 3.0, 0.0).unwrap();
    let s = t.sample_range();
    assert_eq!(s.xs.len(), s.ys.len());
    for (x, y) in s.iter() {
        assert_eq!(y, t.density(x));
    }
}

#[test]
fn sample_range_recomputed() {
    let n = Normal::new(1.0, 0.5).unwrap();
    assert_eq!(n.sample_range(), n.sample_range());
}

#[test]
fn generate_range_edge_cases() {
    assert!(generate_range(1.0, 0.0, 0.1, false).is_empty());
    assert!(generate_range(0.2, 0.8, 1.0, true).is_empty());
    assert!(generate_range(0.0, 1.0, -0.1, false).is_empty());
    assert!(generate_range(0.0, f64::INFINITY, 0.1, false).is_empty());
    assert!(generate_range(f64::NAN, 1.0, 0.1, true).is_empty());
    assert_eq!(generate_range(2.0, 2.0, 0.1, false), vec![2.0]);
    assert_eq!(generate_range(-2.0, 1.0, 0.5, true), vec![-2.0, -1.0, 0.0, 1.0]);
}

#[test]
fn generate_range_stalled_step() {
    // 1e17 + 0.1 == 1e17
    assert!(generate_range(1e17, 1e17 + 64.0, 0.1, false).is_empty());
    assert!(generate_range(-1e17 - 64.0, -1e17, 0.1, false).is_empty());
    assert!(Normal::new(1e17, 1.0).unwrap().sample_points().is_empty());
    // Far from the origin but still resolvable
    let xs = Normal::new(1e10, 1.0).unwrap().sample_points();
    assert!((80..=81).contains(&xs.len()), "len = {}", xs.len());
    assert!(ascending(&xs));
}

#[test]
fn generate_range_point_cap() {
    assert!(Normal::new(0.0, 1e10).unwrap().sample_points().is_empty());
    assert!(generate_range(0.0, 1e9, 0.1, false).is_empty());
    assert!(generate_range(0.0, 1e20, 1.0, true).is_empty());
    assert!(generate_range(1e16, 1e16 + 2.0, 1.0, true).is_empty());
    let xs = generate_range(0.0, (MAX_POINTS - 1) as f64, 1.0, true);
    assert_eq!(xs.len(), MAX_POINTS);
    assert!(generate_range(0.0, MAX_POINTS as f64, 1.0, true).is_empty());
}
