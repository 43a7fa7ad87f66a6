//! Height sample sources feeding the mesh pipeline.

use std::io::Read;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;

/// Digit streams longer than this are truncated.
const DIGIT_SAMPLE_CAP: usize = 1023;
/// Height contributed by each decoded digit value.
const DIGIT_STEP: f32 = 5.0;
/// Samples produced by the random source per build.
const NOISE_SAMPLES: usize = 257;
/// Random offsets are uniform in [0, NOISE_MAX).
const NOISE_MAX: f32 = 20.0;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("invalid byte {byte:#04x} in height stream")]
    BadDigit { byte: u8 },

    #[error("failed to read height samples: {0}")]
    Io(#[from] std::io::Error),
}

/// A source of height offsets for the mesh builder.
pub trait SampleSource {
    fn collect(&mut self) -> Result<Vec<f32>, SampleError>;
}

/// Decodes ASCII digits from a byte stream into heights.
///
/// `.` bytes are skipped, so a decimal expansion can be piped in unchanged.
/// Digit d becomes height d * 5; any other byte fails the whole stream.
pub struct DigitStream<R> {
    reader: R,
}

impl<R: Read> DigitStream<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> SampleSource for DigitStream<R> {
    fn collect(&mut self) -> Result<Vec<f32>, SampleError> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;

        let mut heights = Vec::new();
        for &byte in &bytes {
            if byte == b'.' {
                continue;
            }
            if !byte.is_ascii_digit() {
                return Err(SampleError::BadDigit { byte });
            }
            heights.push(f32::from(byte - b'0') * DIGIT_STEP);
            if heights.len() == DIGIT_SAMPLE_CAP {
                break;
            }
        }
        Ok(heights)
    }
}

/// Uniformly random offsets in [0, 20), a fixed number per build.
pub struct UniformNoise {
    rng: SmallRng,
}

impl UniformNoise {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl SampleSource for UniformNoise {
    fn collect(&mut self) -> Result<Vec<f32>, SampleError> {
        Ok((0..NOISE_SAMPLES)
            .map(|_| self.rng.random_range(0.0..NOISE_MAX))
            .collect())
    }
}
