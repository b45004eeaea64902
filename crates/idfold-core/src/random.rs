use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random string of `n` ASCII letters (`a-zA-Z`).
///
/// Uses the thread-local RNG. Fine for test fixtures and throwaway names, not for
/// secrets or identifiers that must be unique; use [`crate::preset::short_id`] for those.
pub fn rand_letters(n: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_letters_has_requested_length_and_alphabet() {
        let s = rand_letters(64);
        assert_eq!(s.len(), 64);
        assert!(s.bytes().all(|b| b.is_ascii_alphabetic()));
    }

    #[test]
    fn rand_letters_zero_is_empty() {
        assert!(rand_letters(0).is_empty());
    }
}
