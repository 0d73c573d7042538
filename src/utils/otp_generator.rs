// utils/otp_generator.rs
use rand::Rng;

pub fn generate_otp() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(100000..999999))
}

/// Url-safe single-use token for booking accept links.
pub fn generate_accept_token() -> String {
    use rand::distr::Alphanumeric;

    let mut rng = rand::rng();
    (0..32)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_is_six_digits() {
        for _ in 0..100 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn accept_token_is_alphanumeric() {
        let token = generate_accept_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn accept_tokens_do_not_repeat() {
        let a = generate_accept_token();
        let b = generate_accept_token();
        assert_ne!(a, b);
    }
}
