use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::{messages::models::Message, users::models::User};

pub const SUBJECT: &str = "Studying";
pub const EMAIL_HOST: &str = "@edu.hse.ru";

/// Upper bound (exclusive) for generated users and messages.
const MAX_ENTITIES: usize = 50;
/// Upper bound (exclusive) for the length of a generated body.
const MAX_BODY_LENGTH: usize = 100;

#[derive(Clone)]
pub struct Generator(Arc<Mutex<StdRng>>);

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self(Arc::new(Mutex::new(rng)))
    }

    pub async fn generate(&self) -> (Vec<User>, Vec<Message>) {
        let mut rng = self.0.lock().await;
        generate_with(&mut *rng)
    }
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> (Vec<User>, Vec<Message>) {
    let users: Vec<User> = (0..rng.gen_range(1..MAX_ENTITIES))
        .map(|i| {
            let name = format!("User{i}");
            let email = format!("{name}{EMAIL_HOST}");
            User::new(i as i64, name, email)
        })
        .collect();

    let messages = (0..rng.gen_range(1..MAX_ENTITIES))
        .map(|_| {
            let length = rng.gen_range(1..MAX_BODY_LENGTH);
            let body = Message::random_body(&mut *rng, length);
            let sender_id = users[rng.gen_range(0..users.len())].id;
            let receiver_id = users[rng.gen_range(0..users.len())].id;
            Message::new(SUBJECT, body, sender_id, receiver_id)
        })
        .collect();

    debug!("Generated random data");
    (users, messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[tokio::test]
    async fn seeded_generators_agree() {
        let (users_a, messages_a) = Generator::new(Some(11)).generate().await;
        let (users_b, messages_b) = Generator::new(Some(11)).generate().await;

        assert_eq!(users_a, users_b);
        assert_eq!(messages_a, messages_b);
        assert!(logs_contain("Generated random data"));
    }

    #[test]
    fn users_are_numbered_from_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let (users, _) = generate_with(&mut rng);
        for (i, user) in users.iter().enumerate() {
            assert_eq!(user.id, i as i64);
            assert_eq!(user.user_name, format!("User{i}"));
            assert_eq!(user.email, format!("User{i}@edu.hse.ru"));
        }
    }
}
