use std::fs::File;
use std::io::{BufWriter, Write};

/// Synthetic coupling coefficient for a film of normalized thickness `key`
/// at c-axis tilt `angle_deg`: a shear-mode lobe peaking near 45° tilt,
/// windowed over thickness.
fn coupling(key: f64, angle_deg: f64) -> f64 {
    let tilt = angle_deg.to_radians();
    let lobe = (2.0 * tilt).sin().powi(2);
    let window = (-(key - 0.75).powi(2) / (2.0 * 0.45_f64.powi(2))).exp();
    11.0 * lobe * window
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let keys = [1.5, 1.25, 1.0, 0.75, 0.5, 0.25, 0.0];

    for key in keys {
        let file_name = format!("{key}.txt");
        let file = File::create(&file_name).expect("Failed to create output file");
        let mut writer = BufWriter::new(file);

        for angle in 0..=90 {
            let value = (coupling(key, angle as f64) + rng.gauss(0.0, 0.05)).max(0.0);
            writeln!(writer, "{angle} {value:.4}").expect("Failed to write record");
        }
        writer.flush().expect("Failed to flush output file");
    }

    println!("Wrote {} condition files (91 angle samples each)", keys.len());
}
