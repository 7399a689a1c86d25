// Partially decrypted clue text shown in the header while a level is in play.
use rand::Rng;

pub const SCRAMBLE_CHARS: &str = "øX#_9µ£§∆∂∑∏πΩ@%&";
const IMAGE_PREFIX: &str = "image://";
const IMAGE_PLACEHOLDER: &str = "DONNÉES_VISUELLES_CRYPTÉES";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClueContent<'a> {
    Text(&'a str),
    Image { url: &'a str },
}

impl<'a> ClueContent<'a> {
    pub fn parse(clue: &'a str) -> Self {
        match clue.strip_prefix(IMAGE_PREFIX) {
            Some(url) => ClueContent::Image { url },
            None => ClueContent::Text(clue),
        }
    }
}

/// Reveal each character of `clue` with probability `progress`; the rest
/// become noise. Spaces and underscores always show through.
pub fn scramble<R: Rng + ?Sized>(clue: &str, progress: f64, rng: &mut R) -> String {
    let target = match ClueContent::parse(clue) {
        ClueContent::Text(text) => text,
        ClueContent::Image { .. } => IMAGE_PLACEHOLDER,
    };
    if progress >= 1.0 {
        return target.to_string();
    }
    let noise: Vec<char> = SCRAMBLE_CHARS.chars().collect();
    target
        .chars()
        .map(|c| {
            if c == ' ' || c == '_' || rng.gen_bool(progress.clamp(0.0, 1.0)) {
                c
            } else {
                noise[rng.gen_range(0..noise.len())]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_progress_reveals_clue() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(scramble("PROTOCOLE NEXUS", 1.0, &mut rng), "PROTOCOLE NEXUS");
    }

    #[test]
    fn zero_progress_hides_letters_but_keeps_shape() {
        let mut rng = StdRng::seed_from_u64(10);
        let out = scramble("06 AVRIL_X", 0.0, &mut rng);
        let chars: Vec<char> = out.chars().collect();
        assert_eq!(chars.len(), 10);
        assert_eq!(chars[2], ' ');
        assert_eq!(chars[8], '_');
        for (i, c) in chars.iter().enumerate() {
            if i != 2 && i != 8 {
                assert!(SCRAMBLE_CHARS.contains(*c), "unexpected char {c:?}");
            }
        }
    }

    #[test]
    fn image_clues_scramble_a_placeholder() {
        let mut rng = StdRng::seed_from_u64(11);
        let clue = "image://https://example.org/fragment.png";
        assert_eq!(
            ClueContent::parse(clue),
            ClueContent::Image {
                url: "https://example.org/fragment.png"
            }
        );
        assert_eq!(scramble(clue, 1.0, &mut rng), IMAGE_PLACEHOLDER);
        assert_eq!(ClueContent::parse("06 AVRIL"), ClueContent::Text("06 AVRIL"));
    }
}
