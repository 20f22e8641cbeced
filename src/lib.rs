//! Head/tail breaks is a classification scheme for data with a heavy-tailed
//! distribution, such as city sizes or the degrees of a scale-free network.
//! The method was developed by
//! [Bin Jiang](https://arxiv.org/abs/1209.2801) (2013): the data is split
//! at its arithmetic mean into a "head" (values above the mean) and a "tail"
//! (values at or below it), and the split is repeated on the head for as long
//! as the head remains a minority of more than two values.
//!
//! Unlike equal-interval or quantile schemes, the resulting classes are
//! deliberately uneven: each class is much larger than the one above it,
//! which mirrors the scaling hierarchy of the data. The number of classes
//! this produces for a given sample is known as its **ht-index**.

use num_traits::cast::FromPrimitive;
use num_traits::Float;
use std::fmt::Debug;

#[cfg(not(target_arch = "wasm32"))]
mod ffi;
#[cfg(not(target_arch = "wasm32"))]
pub use crate::ffi::{
    drop_headtail_result, headtail_ffi, ExternalArray, HeadTailResult, InternalArray,
};

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
pub use crate::wasm::headtail_wasm;

mod errors;
pub use crate::errors::HeadTailErr;

/// A trait that encompasses the floating-point types the means are computed in
pub trait HtNum: Float + FromPrimitive + Debug {}
impl<T: Float + FromPrimitive + Debug> HtNum for T {}

/// The result of a head/tail classification.
///
/// Classes are numbered from 1 (the lowest values, the "tail") upwards, so the
/// last class holds the head of the final split.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadTailBreaks<T> {
    /// Class boundaries: the sample minimum, the successive head means, and
    /// the sample maximum. Class `j` covers `breaks[j - 1] < x <= breaks[j]`,
    /// except that class 1 also includes the minimum itself.
    pub breaks: Vec<T>,
    /// Number of observations in each class, ordered by class number
    pub sizes: Vec<usize>,
    /// Class number of each observation, in input order
    pub members: Vec<usize>,
}

impl<T: HtNum> HeadTailBreaks<T> {
    /// The number of classes that were actually produced. This can be lower
    /// than the number requested if the head became too small to split.
    pub fn classes(&self) -> usize {
        self.sizes.len()
    }

    /// Classify an arbitrary value against these breaks.
    ///
    /// Returns `None` for values outside the range of the original sample, and for NaN.
    pub fn class_of(&self, value: T) -> Option<usize> {
        let (first, last) = (*self.breaks.first()?, *self.breaks.last()?);
        if value.is_nan() || value < first || value > last {
            return None;
        }
        Some(classify(&self.breaks, value))
    }

    /// The smallest and largest observed value in each class.
    ///
    /// `data` must be the sample these breaks were computed from.
    pub fn class_bounds(&self, data: &[T]) -> Vec<Option<(T, T)>> {
        let mut bounds: Vec<Option<(T, T)>> = vec![None; self.classes()];
        for (&x, &member) in data.iter().zip(&self.members) {
            if let Some(bound) = bounds.get_mut(member - 1) {
                *bound = match *bound {
                    None => Some((x, x)),
                    Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
                };
            }
        }
        bounds
    }
}

/// Arithmetic mean of a non-empty slice. Falls back to summing `x / n` when
/// the plain sum overflows, so any finite input has a finite mean.
fn mean<T: HtNum>(xs: &[T]) -> Result<T, HeadTailErr> {
    let n = T::from_usize(xs.len()).ok_or(HeadTailErr::ConversionError)?;
    let sum = xs.iter().fold(T::zero(), |acc, &x| acc + x);
    if sum.is_finite() {
        Ok(sum / n)
    } else {
        Ok(xs.iter().fold(T::zero(), |acc, &x| acc + x / n))
    }
}

fn min_max<T: HtNum>(xs: &[T]) -> Option<(T, T)> {
    let first = *xs.first()?;
    Some(
        xs.iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

/// The values strictly greater than `threshold`, in their original order
fn head<T: HtNum>(xs: &[T], threshold: T) -> Vec<T> {
    xs.iter().copied().filter(|&x| x > threshold).collect()
}

/// Repeatedly split off the head, recording each mean, for at most
/// `splits` iterations. Stops as soon as a head has two or fewer values.
///
/// A mean that leaves an empty head (a constant subset) splits nothing and is
/// not recorded, so every recorded mean lies in `[lo, hi)` of its subset and
/// the means are strictly increasing.
fn head_means<T: HtNum>(data: &[T], splits: usize) -> Result<Vec<T>, HeadTailErr> {
    let mut means = Vec::with_capacity(splits);
    let mut subset = data.to_vec();
    for _ in 0..splits {
        let Some((lo, hi)) = min_max(&subset) else {
            break;
        };
        // rounding can push the mean of a (nearly) constant subset past its range
        let mu = mean(&subset)?.max(lo).min(hi);
        let next = head(&subset, mu);
        if next.is_empty() {
            break;
        }
        means.push(mu);
        subset = next;
        if subset.len() <= 2 {
            break;
        }
    }
    Ok(means)
}

/// Left-open, right-closed binning, with the minimum (`breaks[0]`) closing
/// the first class. Assumes `breaks[0] <= value <= breaks[last]`.
#[inline]
fn classify<T: HtNum>(breaks: &[T], value: T) -> usize {
    breaks[1..].partition_point(|&b| b < value) + 1
}

/// Classify `data` into at most `nclasses` classes using head/tail breaks.
///
/// The sample is split at its mean, and the split is repeated on the values
/// above the mean (the head). Splitting stops once `nclasses - 1` breaks have
/// been found, or as soon as a head contains two or fewer values, so fewer
/// classes than requested may be returned.
///
/// Values lying exactly on a break belong to the lower class.
///
/// # Notes
/// Fewer than two classes can't be meaningfully requested, so `nclasses <= 1`
/// returns `Ok(None)`. An empty sample, or one containing NaN or infinite
/// values, is an error.
///
/// # References
/// 1. [Jiang, B. (2013). Head/tail breaks: A new classification scheme for data with a heavy-tailed distribution. The Professional Geographer, 65(3), 482–494.](https://doi.org/10.1080/00330124.2012.700499)
///
/// # Example
///
/// ```
/// use headtail::headtail;
///
/// let input = vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 100.0];
/// let result = headtail(&input, 3).unwrap().unwrap();
///
/// // the head after the first split is [100.0], which is too small to split again
/// assert_eq!(result.classes(), 2);
/// assert_eq!(result.sizes, vec![5, 1]);
/// assert_eq!(result.members, vec![1, 1, 1, 1, 1, 2]);
/// assert_eq!(result.breaks.len(), 3);
/// ```
pub fn headtail<T: HtNum>(
    data: &[T],
    nclasses: i32,
) -> Result<Option<HeadTailBreaks<T>>, HeadTailErr> {
    if nclasses <= 1 {
        return Ok(None);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(HeadTailErr::NonFiniteError);
    }
    let (min, max) = min_max(data).ok_or(HeadTailErr::EmptyInputError)?;

    let means = head_means(data, usize::try_from(nclasses - 1)?)?;
    let mut breaks = Vec::with_capacity(means.len() + 2);
    breaks.push(min);
    breaks.extend(means);
    breaks.push(max);
    debug_assert!(breaks.windows(2).all(|w| w[0] <= w[1]));

    let members: Vec<usize> = data.iter().map(|&x| classify(&breaks, x)).collect();
    let mut sizes = vec![0; breaks.len() - 1];
    for &member in &members {
        sizes[member - 1] += 1;
    }
    Ok(Some(HeadTailBreaks {
        breaks,
        sizes,
        members,
    }))
}

/// The interior breaks returned by [headtail] are means, and so are rarely
/// suitable for a legend. Rounding them naively may be too loose (leaving
/// spurious decimal places) or too strict (producing classes ranging "from x
/// to x"). Instead, this chooses the roundest number that separates the
/// highest value in each class from the lowest value in the class above it,
/// giving just enough precision to distinguish the classes.
///
/// A request for fewer than two classes returns no breaks.
///
/// # Original Implementation
/// <https://observablehq.com/@visionscarto/natural-breaks#round>
pub fn roundbreaks<T: HtNum>(data: &[T], nclasses: i32) -> Result<Vec<T>, HeadTailErr> {
    let Some(ht) = headtail(data, nclasses)? else {
        return Ok(Vec::new());
    };
    let ten = T::from_f64(10.0).ok_or(HeadTailErr::ConversionError)?;
    let two = T::from_f64(2.0).ok_or(HeadTailErr::ConversionError)?;
    ht.class_bounds(data)
        .windows(2)
        .map(|pair| {
            let (_, low) = pair[0].ok_or(HeadTailErr::LowWindowError)?;
            let (high, _) = pair[1].ok_or(HeadTailErr::HighWindowError)?;
            let p = ten.powf((T::one() - (high - low).log10()).floor());
            Ok((((high + low) / two) * p).floor() / p)
        })
        .collect::<Result<Vec<T>, _>>()
}
