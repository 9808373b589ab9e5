use super::DiscreteDirectivity;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

macro_rules! par_map {
    ($iter:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            $iter.par_iter().map($f).collect::<Vec<_>>()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $iter.iter().map($f).collect::<Vec<_>>()
        }
    }};
}

impl DiscreteDirectivity {
    /// Returns the attenuation in \[dB\] for each of `frequencies` in each of `directions`.
    ///
    /// `directions` are (`phi`, `theta`) pairs in \[rad\]. Frequencies are resolved to columns once
    /// for the whole batch. With the `parallel` feature, directions are resolved on the rayon
    /// thread pool.
    #[must_use]
    pub fn attenuation_batch(
        &self,
        frequencies: &[f64],
        directions: &[(f64, f64)],
    ) -> Vec<Vec<f64>> {
        let columns = self.frequency_axis.indices_of(frequencies);
        par_map!(directions, |&(phi, theta): &(f64, f64)| {
            let record = self.resolve(theta, phi);
            columns
                .iter()
                .map(|&c| record.attenuation()[c])
                .collect::<Vec<_>>()
        })
    }
}
