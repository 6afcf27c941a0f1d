/// Estimates the derivative of `function` at `x` with a fourth-order central
/// difference.
///
/// ```text
/// f'(x) ≈ ((f(x - 2h) - f(x + 2h)) + 8 (f(x + h) - f(x - h))) / 12h
/// ```
///
/// Exactly four evaluations are made, at `x + h`, `x - h`, `x + 2h` and
/// `x - 2h` in that order. The stencil never uses `f(x)` itself.
///
/// The estimate has no failure modes of its own. A poor estimate surfaces in
/// the solver's conditioning check on the following step.
pub fn central_difference<F>(function: &F, x: f64, step: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    let forward = function(x + step);
    let backward = function(x - step);
    let forward_2 = function(x + 2.0 * step);
    let backward_2 = function(x - 2.0 * step);

    ((backward_2 - forward_2) + 8.0 * (forward - backward)) * step.recip() / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    use approx::assert_relative_eq;

    #[test]
    fn exact_for_quartic() {
        // Fourth-order stencil: exact (up to rounding) for polynomials of degree <= 4.
        let f = |x: f64| x.powi(4) - 3.0 * x.powi(2) + x;
        let fp = |x: f64| 4.0 * x.powi(3) - 6.0 * x + 1.0;

        for x in [-2.0, -0.5, 0.0, 1.0, 3.0] {
            assert_relative_eq!(central_difference(&f, x, 1e-3), fp(x), epsilon = 1e-8);
        }
    }

    #[test]
    fn approximates_sin() {
        for x in [0.0, 0.5, 3.0] {
            assert_relative_eq!(
                central_difference(&f64::sin, x, 1e-4),
                x.cos(),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn skips_center_point() {
        let calls = RefCell::new(Vec::new());
        let f = |x: f64| {
            calls.borrow_mut().push(x);
            x
        };

        let estimate = central_difference(&f, 1.0, 0.5);

        assert_relative_eq!(estimate, 1.0);
        assert_eq!(*calls.borrow(), vec![1.5, 0.5, 2.0, 0.0]);
    }

    #[test]
    fn works_through_trait_objects() {
        let f: &dyn Fn(f64) -> f64 = &|x| 2.0 * x;
        assert_relative_eq!(central_difference(f, 7.0, 1e-4), 2.0, epsilon = 1e-10);
    }
}
