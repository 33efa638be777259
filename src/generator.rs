use crate::error::GenerationError;
use rand::Rng;
use std::collections::HashSet;

pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const SHORT_CODE_LENGTH: usize = 6;
pub const MAX_GENERATION_ATTEMPTS: u32 = 100;

pub trait RandomSource: Send {
    fn pick(&mut self, alphabet: &[u8]) -> u8;
}

pub struct RngSource<R>(pub R);

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn pick(&mut self, alphabet: &[u8]) -> u8 {
        alphabet[self.0.gen_range(0..alphabet.len())]
    }
}

pub fn generate_code<S>(source: &mut S, used: &HashSet<String>) -> Result<String, GenerationError>
where
    S: RandomSource + ?Sized,
{
    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let code: String = (0..SHORT_CODE_LENGTH)
            .map(|_| source.pick(ALPHABET) as char)
            .collect();
        if !used.contains(&code) {
            return Ok(code);
        }
        tracing::debug!(attempt, code = %code, "Generated short code collides, retrying");
    }
    tracing::error!("Exhausted all retries of generating a unique short code");
    Err(GenerationError {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}

#[cfg(test)]
pub struct ScriptedSource {
    chars: Vec<u8>,
    position: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(script: &str) -> Self {
        Self {
            chars: script.as_bytes().to_vec(),
            position: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn pick(&mut self, _alphabet: &[u8]) -> u8 {
        let next = self.chars[self.position % self.chars.len()];
        self.position += 1;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn alphabet_has_62_distinct_characters() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(unique.len(), 62);
        assert!(ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn generated_codes_are_six_alphanumeric_characters() {
        let mut source = RngSource(StdRng::seed_from_u64(42));
        let used = HashSet::new();
        for _ in 0..500 {
            let code = generate_code(&mut source, &used).unwrap();
            assert_eq!(code.len(), SHORT_CODE_LENGTH);
            assert!(code.bytes().all(|c| ALPHABET.contains(&c)));
        }
    }

    #[test]
    fn skips_codes_already_in_use() {
        let mut source = ScriptedSource::new("aaaaaabbbbbb");
        let used = HashSet::from(["aaaaaa".to_string()]);
        assert_eq!(generate_code(&mut source, &used).unwrap(), "bbbbbb");
    }

    #[test]
    fn gives_up_when_every_candidate_collides() {
        let mut source = ScriptedSource::new("z");
        let used = HashSet::from(["zzzzzz".to_string()]);
        let err = generate_code(&mut source, &used).unwrap_err();
        assert_eq!(err.attempts, MAX_GENERATION_ATTEMPTS);
    }
}
