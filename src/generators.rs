use rand::Rng;

const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a random integer from min to max, inclusive
///
/// # Examples
///
/// let x = generate_integer(&mut rng, 0, 10000);
///
pub fn generate_integer<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Generates a random float in [min, max), rounded to `places` decimal places
///
/// # Examples
///
/// let x = generate_float(&mut rng, 3.2, 5.2, 2);
///
pub fn generate_float<R: Rng>(rng: &mut R, min: f64, max: f64, places: u32) -> f64 {
    round_to(rng.gen_range(min..max), places)
}

/// Generates a random string of 'length'.
/// Currently selects from the uppercase alphabet.
///
/// # Examples
///
/// let x = generate_string(&mut rng, 25);
///
pub fn generate_string<R: Rng>(rng: &mut R, length: usize) -> String {
    let chars = UPPERCASE_CHARS.as_bytes();
    let mut result = String::with_capacity(length);

    for _ in 0..length {
        let index = rng.gen_range(0..chars.len());
        result.push(chars[index] as char);
    }

    result
}

/// Generates a boolean that is true with probability `p`
///
/// # Examples
///
/// let x = generate_flag(&mut rng, 0.87);
///
pub fn generate_flag<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen_bool(p)
}

/// Generate a value from a slice of choices
///
/// # Examples
///
/// let x = vec!["A", "B", "C"];
/// let y = generate_choice(&mut rng, &x);
///
pub fn generate_choice<'a, R: Rng, T>(rng: &mut R, choices: &'a [T]) -> &'a T {
    &choices[rng.gen_range(0..choices.len())]
}

/// Rounds a float to the given number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
