//! Random greeting selection.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use rand::Rng;

/// The fixed set of localized greetings.
pub const GREETINGS: [&str; 4] = ["Hello world!", "¡Hola Mundo!", "你好，世界！", "Bonjour le monde!"];

/// Pick one greeting uniformly at random.
pub fn pick_greeting<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS[rng.random_range(0..GREETINGS.len())]
}

/// RNG for the browser, seeded from `Math.random` and the clock.
#[cfg(feature = "csr")]
pub fn browser_rng() -> rand::rngs::SmallRng {
    use rand::SeedableRng;

    let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits();
    rand::rngs::SmallRng::seed_from_u64(seed)
}
