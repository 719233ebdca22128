use rand::Rng;

use crate::scalar::{ Real, lit };


// Polar Box-Muller transformation

pub fn randn<T: Real>(rng: &mut impl Rng) -> (T, T) {
  loop {
    let u = rng.gen_range(-T::one(), T::one());
    let v = rng.gen_range(-T::one(), T::one());
    let r = u * u + v * v;
    // Try again if outside interval
    if r == T::zero() || r >= T::one() { continue }
    let c = (lit::<T>(-2.0) * r.ln() / r).sqrt();
    return (u * c, v * c)
  }
}


/// Sign with `sign(0) == 0`, the subgradient of |x| at the origin.

#[inline]
pub fn sign<T: Real>(value: T) -> T {
  if value > T::zero() {
    T::one()
  } else if value < T::zero() {
    -T::one()
  } else {
    T::zero()
  }
}


/// Elementwise `|a - b| <= atol + rtol * |b|` over two equally long sequences.

pub fn all_close<T: Real>(a: &[T], b: &[T], rtol: T, atol: T) -> bool {
  a.len() == b.len() && a.iter().zip(b).all(|(&a, &b)| {
    (a - b).abs() <= atol + rtol * b.abs()
  })
}
