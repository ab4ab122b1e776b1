//! Pascal's triangle for `C(n, k)` up to `n = 24`, plus its reciprocals as
//! 64-bit floats so probability queries never divide at call time.

use crate::cards::CARD_NB;
use crate::error::Error;
use crate::error::Result;
use std::sync::OnceLock;

pub struct Comb {
    /// `c[n][k] = C(n, k)` for `0 <= k <= n <= CARD_NB`.
    c: Vec<Vec<u64>>,
    /// `inv[n][k] = 1.0 / C(n, k)`.
    inv: Vec<Vec<f64>>,
}

impl Comb {
    fn build() -> Self {
        let n_max = CARD_NB;
        let mut c = vec![vec![0u64; n_max + 1]; n_max + 1];
        c[0][0] = 1;
        for n in 1..=n_max {
            c[n][0] = 1;
            c[n][n] = 1;
            for k in 1..n {
                c[n][k] = c[n - 1][k] + c[n - 1][k - 1];
            }
        }
        let inv = c
            .iter()
            .map(|row| row.iter().map(|&x| if x == 0 { 0.0 } else { 1.0 / x as f64 }).collect())
            .collect();
        Self { c, inv }
    }

    fn check(&self, n: usize, k: usize) -> Result<()> {
        if n > CARD_NB || k > n {
            return Err(Error::OutOfRange {
                what: "comb(n, k)",
                value: n as i64,
            });
        }
        Ok(())
    }

    /// `C(n, k)`.
    pub fn get(&self, n: usize, k: usize) -> Result<u64> {
        self.check(n, k)?;
        Ok(self.c[n][k])
    }

    /// `1.0 / C(n, k)`, division-free at the probability-query call site.
    pub fn get_inv(&self, n: usize, k: usize) -> Result<f64> {
        self.check(n, k)?;
        Ok(self.inv[n][k])
    }
}

static COMB: OnceLock<Comb> = OnceLock::new();

pub fn comb() -> &'static Comb {
    COMB.get_or_init(Comb::build)
}
