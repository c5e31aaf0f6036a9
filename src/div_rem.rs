use num_integer::Integer;

pub(crate) trait SuccessiveDivRem: Sized {
    /// Splits `self` into one quotient per divisor, taking the divisors in the
    /// given order, and returns the quotients together with what is left over.
    ///
    /// Each step takes `q = rest / divisor` and continues with `rest % divisor`,
    /// so for non-negative input the result satisfies
    ///
    /// self == sum(q[i] * divisors[i]) + remainder.
    fn successive_div_rem<const N: usize>(&self, divisors: [Self; N]) -> ([Self; N], Self);
}

impl<T: Integer + Copy> SuccessiveDivRem for T {
    fn successive_div_rem<const N: usize>(&self, divisors: [Self; N]) -> ([Self; N], Self) {
        let mut rest = *self;
        let quotients = divisors.map(|divisor| {
            let (q, r) = rest.div_rem(&divisor);
            rest = r;
            q
        });
        (quotients, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_decomposition() {
        let (q, r) = 3_723_004u64.successive_div_rem([3_600_000, 60_000, 1_000]);
        assert_eq!(q, [1, 2, 3]);
        assert_eq!(r, 4);
    }

    #[test]
    fn order_of_divisors_matters() {
        // Seconds first swallows everything the minutes would have taken.
        let (q, r) = 61_000u64.successive_div_rem([1_000, 60_000]);
        assert_eq!(q, [61, 0]);
        assert_eq!(r, 0);
    }

    #[test]
    fn reconstructs_input() {
        let divisors = [31_536_000_000u64, 2_592_000_000, 86_400_000, 1_000];
        for value in [0u64, 1, 999, 86_400_000, 34_218_061_200, u64::MAX] {
            let (q, r) = value.successive_div_rem(divisors);
            let sum = q
                .iter()
                .zip(divisors.iter())
                .fold(r as u128, |acc, (q, d)| acc + (*q as u128) * (*d as u128));
            assert_eq!(sum, value as u128);
        }
    }
}
