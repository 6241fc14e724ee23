use ndarray::{Array1, s};
use regumeasure::estimators::approaches::template::embedding::EmbeddingParams;
use regumeasure::estimators::regularity::Regularity;
use regumeasure::estimators::{GlobalValue, ProfileValues};

fn main() {
    // Example chaotic data - a logistic map trajectory
    let mut values = Vec::with_capacity(200);
    let mut x: f64 = 0.4;
    for _ in 0..200 {
        values.push(x);
        x = 3.99 * x * (1.0 - x);
    }
    let data = Array1::from(values);

    let m = 2;
    let r = 0.25;
    let params = EmbeddingParams::new(m).with_radius(r);

    // Instantiate the sample entropy estimator
    let sampen = Regularity::sample(data.clone(), params.clone()).unwrap();

    // Count the full-length window matches manually to verify
    let n = data.len();
    let mut manual_matches = 0u64;
    for i in 0..n - m {
        for j in (i + 1)..(n - m) {
            let mut dist: f64 = 0.0;
            for k in 0..=m {
                dist = dist.max((data[i + k] - data[j + k]).abs());
            }
            if dist <= r {
                manual_matches += 1;
            }
        }
    }

    println!("Logistic map series of length {n}");
    println!("Manual window match count: {manual_matches}");
    println!("Library window match count: {}", sampen.matches_above[m]);

    // Entropy per dimension and the headline value at dimension m
    let profile = sampen.profile_values();
    let global_value = sampen.global_value();

    println!("Sample entropy profile: {profile:?}");
    println!("Sample entropy at m = {m}: {global_value}");

    // Cross-approximate entropy of the series against its lagged copy
    let template = data.slice(s![..n - 1]).to_owned();
    let target = data.slice(s![1..]).to_owned();
    let xapen = Regularity::cross_approx(template, target, params).unwrap();

    println!("Cross-approximate Phi values: {:?}", xapen.phi);
    println!("Cross-approximate entropy: {}", xapen.global_value());
}
