#![cfg(feature = "serde")]

use distlab::params::ParameterSet;
use distlab::registry::{self, DistributionId};
use distlab::stats::{Distribution, Exponential};

#[test]
fn parameter_set_is_a_plain_map() {
    let params = ParameterSet::from([("n", 20.0), ("p", 0.5)]);
    let json = serde_json::to_string(&params).unwrap();
    assert_eq!(json, r#"{"n":20.0,"p":0.5}"#);
    let back: ParameterSet = serde_json::from_str(r#"{"μ": 1.5, "sigma": 2}"#).unwrap();
    assert_eq!(back.get("μ"), Some(1.5));
    assert_eq!(back.get("sigma"), Some(2.0));
}

#[test]
fn distribution_id_uses_string_keys() {
    for &id in DistributionId::ALL {
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.key()));
        let back: DistributionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
    assert!(serde_json::from_str::<DistributionId>("\"poisson\"").is_err());
}

#[test]
fn descriptor_serializes_metadata() {
    let d = registry::get("exponential").unwrap();
    let v = serde_json::to_value(d).unwrap();
    assert_eq!(v["id"], "exponential");
    assert_eq!(v["kind"], "continuous");
    assert_eq!(v["parameters"][0]["symbol"], "λ");
    assert_eq!(v["parameters"][0]["aliases"][1], "rate");
    assert_eq!(v["parameters"][0]["fallback"], 1.0);
}

#[test]
fn statistics_and_sample_serialize() {
    let e = Exponential::new(2.0).unwrap();
    let v = serde_json::to_value(e.statistics()).unwrap();
    assert_eq!(v["mean"], 0.5);
    assert_eq!(v["mode"], 0.0);

    let uniform = registry::get("uniform").unwrap();
    let s = uniform.statistics(&uniform.default_parameters()).unwrap();
    assert!(serde_json::to_value(s).unwrap()["mode"].is_null());

    let sample = e.sample_range();
    let v = serde_json::to_value(&sample).unwrap();
    assert_eq!(v["xs"].as_array().unwrap().len(), sample.len());
}
