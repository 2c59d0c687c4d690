use rand::Rng;

/// No candidate passed the predicate within the attempt cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted {
    pub attempts: u32,
}

/// Draws candidates with `propose` until one satisfies `accept`, giving up
/// after `max_attempts` draws.
pub fn rejection_sample<R, T>(
    rng: &mut R,
    max_attempts: u32,
    mut propose: impl FnMut(&mut R) -> T,
    accept: impl Fn(&T) -> bool,
) -> Result<T, Exhausted>
where
    R: Rng + ?Sized,
{
    for _ in 0..max_attempts {
        let candidate = propose(rng);
        if accept(&candidate) {
            return Ok(candidate);
        }
    }
    Err(Exhausted {
        attempts: max_attempts,
    })
}
