use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "Final_Remastered_Meta_Data.csv";

#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "Study_ID")]
    study_id: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Standard_Risk_Factor")]
    risk_factor: &'static str,
    #[serde(rename = "Standard_Setting")]
    setting: &'static str,
    #[serde(rename = "Clean_Sample_Size")]
    sample_size: u32,
    #[serde(rename = "OR")]
    odds_ratio: f64,
    #[serde(rename = "P_Value")]
    p_value: f64,
}

/// SplitMix64 stream; a fixed seed always yields the same dataset.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.unit() * n as f64) as usize % n
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

/// Normal draw via Box-Muller.
fn normal(rng: &mut SampleRng, mean: f64, sd: f64) -> f64 {
    let u1 = rng.unit().max(f64::MIN_POSITIVE);
    let u2 = rng.unit();
    mean + sd * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Two-sided p-value from a z statistic, using the
/// `exp(-0.717 z - 0.416 z²)` approximation.
fn approx_p_value(z: f64) -> f64 {
    let z = z.abs();
    (-0.717 * z - 0.416 * z * z).exp().clamp(1e-4, 1.0)
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);

    let authors = [
        "Rahman", "Hossain", "Islam", "Akter", "Khan", "Ahmed", "Chowdhury", "Begum",
        "Sarker", "Uddin", "Das", "Roy", "Karim", "Haque", "Mitra", "Sultana",
    ];
    let settings = ["Urban", "Rural", "Clinical", "Community"];
    // (risk factor, typical odds ratio)
    let risk_factors: [(&str, f64); 7] = [
        ("Smoking", 1.8),
        ("Obesity", 2.6),
        ("Diabetes", 2.2),
        ("Family History", 2.0),
        ("Physical Inactivity", 1.5),
        ("High Salt Intake", 1.7),
        ("Alcohol Use", 1.4),
    ];

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    let mut rows = 0;
    for study in 1..=28 {
        let author = format!("{} et al.", rng.pick(&authors));
        let year = 2005 + rng.below(19) as i32;
        let setting = *rng.pick(&settings);
        let sample_size = (normal(&mut rng, 6.5, 0.8).exp().round() as u32).max(40);

        // each study reports one to three associations
        let reported = 1 + rng.below(3);
        let mut used = Vec::with_capacity(reported);
        while used.len() < reported {
            let idx = rng.below(risk_factors.len());
            if !used.contains(&idx) {
                used.push(idx);
            }
        }

        for idx in used {
            let (risk_factor, typical_or) = risk_factors[idx];
            let odds_ratio = round_to(normal(&mut rng, typical_or.ln(), 0.3).exp(), 2);
            let se = 2.0 / (sample_size as f64).sqrt();
            let p_value = round_to(approx_p_value(odds_ratio.ln() / se), 4);

            writer
                .serialize(Row {
                    study_id: format!("S{study:03}"),
                    author: author.clone(),
                    year,
                    risk_factor,
                    setting,
                    sample_size,
                    odds_ratio,
                    p_value,
                })
                .with_context(|| format!("writing row {rows}"))?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV writer")?;
    println!("Wrote {rows} records to {OUTPUT_PATH}");
    Ok(())
}
