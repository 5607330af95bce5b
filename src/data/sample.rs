use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{FLOATING_BASE_DOF, JOINTS_PER_LEG};

use super::model::LogFile;

/// Parameters of a synthetic recording.
#[derive(Debug, Clone, Copy)]
pub struct SampleSpec {
    pub samples: usize,
    /// Control period in seconds.
    pub dt: f64,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            samples: 6000,
            dt: 0.001,
            seed: 42,
        }
    }
}

const JOINTS: usize = 2 * JOINTS_PER_LEG;

/// Write all seven log files of a fake walking experiment into `dir`.
///
/// Desired joints follow phase-shifted sines; the measured configuration lags
/// them slightly and carries sensor noise, and the motor encoders sit between
/// the two.
pub fn write_sample_experiment(dir: &Path, spec: SampleSpec) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut noise = SensorNoise::from_spec(&spec);

    let mut time: Vec<Vec<f64>> = Vec::with_capacity(spec.samples);
    let mut jpos_des: Vec<Vec<f64>> = Vec::with_capacity(spec.samples);
    let mut jvel_des: Vec<Vec<f64>> = Vec::with_capacity(spec.samples);
    let mut config: Vec<Vec<f64>> = Vec::with_capacity(spec.samples);
    let mut qdot: Vec<Vec<f64>> = Vec::with_capacity(spec.samples);
    let mut joint_jvel: Vec<Vec<f64>> = Vec::with_capacity(spec.samples);
    let mut motor_jpos: Vec<Vec<f64>> = Vec::with_capacity(spec.samples);

    for i in 0..spec.samples {
        let t = i as f64 * spec.dt;
        time.push(vec![t]);

        let (pos, vel) = desired(t);
        let (lag_pos, lag_vel) = desired(t - 0.01);

        let measured_pos = noise.jitter(&lag_pos, 0.002);
        let measured_vel = noise.jitter(&lag_vel, 0.02);

        let mut cfg = base_pose(t);
        cfg.extend(&measured_pos);
        let mut cfg_dot = vec![0.0; FLOATING_BASE_DOF];
        cfg_dot.extend(&measured_vel);

        motor_jpos.push(
            pos.iter()
                .zip(&measured_pos)
                .map(|(d, m)| 0.5 * (d + m))
                .collect(),
        );
        joint_jvel.push(noise.jitter(&measured_vel, 0.05));
        jpos_des.push(pos);
        jvel_des.push(vel);
        config.push(cfg);
        qdot.push(cfg_dot);
    }

    write_rows(dir, LogFile::JposDes, &jpos_des)?;
    write_rows(dir, LogFile::Config, &config)?;
    write_rows(dir, LogFile::JvelDes, &jvel_des)?;
    write_rows(dir, LogFile::Qdot, &qdot)?;
    write_rows(dir, LogFile::JointJvel, &joint_jvel)?;
    write_rows(dir, LogFile::MotorJpos, &motor_jpos)?;
    write_rows(dir, LogFile::Time, &time)?;
    Ok(())
}

/// Desired joint positions and velocities at time `t`.
fn desired(t: f64) -> (Vec<f64>, Vec<f64>) {
    let omega = 2.0 * std::f64::consts::PI * 0.8;
    (0..JOINTS)
        .map(|j| {
            let amplitude = 0.2 + 0.1 * (j % JOINTS_PER_LEG) as f64;
            // Legs move in anti-phase.
            let phase = if j < JOINTS_PER_LEG { 0.0 } else { std::f64::consts::PI };
            let arg = omega * t + phase + 0.3 * j as f64;
            (amplitude * arg.sin(), amplitude * omega * arg.cos())
        })
        .unzip()
}

fn base_pose(t: f64) -> Vec<f64> {
    vec![0.1 * t, 0.0, 0.85 + 0.01 * (5.0 * t).sin(), 0.0, 0.0, 0.0]
}

fn write_rows(dir: &Path, file: LogFile, rows: &[Vec<f64>]) -> Result<()> {
    let path = dir.join(file.file_name());
    let mut out = BufWriter::new(
        File::create(&path).with_context(|| format!("creating {}", path.display()))?,
    );
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{v:.6}")).collect();
        writeln!(out, "{}", line.join(" "))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Zero-mean Gaussian sensor noise, reproducible from `SampleSpec::seed`.
///
/// xoshiro256** core, state expanded from the seed with splitmix64.
struct SensorNoise {
    state: [u64; 4],
}

impl SensorNoise {
    fn from_spec(spec: &SampleSpec) -> Self {
        let mut x = spec.seed;
        let state = std::array::from_fn(|_| {
            x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        });
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.state;
        let out = s1.wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = *s1 << 17;
        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;
        *s2 ^= t;
        *s3 = s3.rotate_left(45);
        out
    }

    /// Uniform in `[0, 1)`.
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// One standard-normal draw (Box-Muller, cosine branch).
    fn standard_normal(&mut self) -> f64 {
        let u1 = self.uniform().max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }

    /// `values` with independent noise of the given standard deviation added.
    fn jitter(&mut self, values: &[f64], std_dev: f64) -> Vec<f64> {
        values
            .iter()
            .map(|v| v + std_dev * self.standard_normal())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_experiment;

    #[test]
    fn sample_directory_loads() {
        let dir = tempfile::tempdir().unwrap();
        let spec = SampleSpec {
            samples: 300,
            ..SampleSpec::default()
        };
        write_sample_experiment(dir.path(), spec).unwrap();

        let log = load_experiment(dir.path()).unwrap();
        assert_eq!(log.samples(), 300);
        assert_eq!(log.config.columns(), FLOATING_BASE_DOF + JOINTS);
        assert_eq!(log.qdot.columns(), FLOATING_BASE_DOF + JOINTS);
        assert_eq!(log.jpos_des.columns(), JOINTS);
        assert_eq!(log.motor_jpos.rows(), 300);
    }

    #[test]
    fn same_seed_same_noise() {
        let spec = SampleSpec {
            seed: 7,
            ..SampleSpec::default()
        };
        let signal = [0.0; 16];
        let a = SensorNoise::from_spec(&spec).jitter(&signal, 1.0);
        let b = SensorNoise::from_spec(&spec).jitter(&signal, 1.0);
        assert_eq!(a, b);

        let other = SensorNoise::from_spec(&SampleSpec::default()).jitter(&signal, 1.0);
        assert_ne!(a, other);
    }

    #[test]
    fn jitter_is_small_and_centred() {
        let mut noise = SensorNoise::from_spec(&SampleSpec::default());
        let signal = vec![1.0; 4000];
        let noisy = noise.jitter(&signal, 0.01);
        let mean = noisy.iter().sum::<f64>() / noisy.len() as f64;
        assert!((mean - 1.0).abs() < 0.002, "mean {mean}");
        assert!(noisy.iter().all(|v| (v - 1.0).abs() < 0.1));
        assert!(noisy.iter().any(|&v| v != 1.0));
    }
}
