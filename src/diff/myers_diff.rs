//! Taken from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! Myers' diff algorithm.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! The implementation of this algorithm is based on the implementation by
//! Brandon Williams.
//!
//! # Heuristics
//!
//! At present this implementation of Myers' does not implement any more
//! advanced heuristics that would solve some pathological cases.  For instance
//! passing two large and completely distinct sequences to the algorithm will
//! make it spin without making reasonable progress.
//! For potential improvements here see [similar#15](https://github.com/mitsuhiko/similar/issues/15).

use std::ops::{Index, IndexMut, Range};

use crate::{
    diff::line_operation::LineOperation,
    utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len},
};

/// Myers' diff algorithm.
///
/// Diff the whole of `old` against the whole of `new`. Every returned
/// `LineOperation` refers to a single element of its side.
pub fn myers_diff<T>(old: &[T], new: &[T]) -> Vec<LineOperation>
where
    T: PartialEq,
{
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::with_capacity(old.len().max(new.len()));

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    result
}

// A D-path is a path which starts at (0,0) that has exactly D non-diagonal
// edges. All D-paths consist of a (D - 1)-path followed by a non-diagonal edge
// and then a possibly empty sequence of diagonal edges called a snake.

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`. In other words, `V` is an array of
/// integers where `V[k]` contains the row index of the endpoint of the furthest
/// reaching path in diagonal `k`.
///
/// We can't use a traditional Vec to represent `V` since we use `k` as an index
/// and it can take on negative values. So instead `V` is represented as a
/// light-weight wrapper around a Vec plus an `offset` which is the maximum
/// value `k` can take on in order to map negative `k`'s back to a value >= 0.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        let offset = isize::try_from(max_d).unwrap_or(isize::MAX);
        Self {
            offset,
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        &self.v[idx.min(self.v.len().saturating_sub(1))]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        let len = self.v.len();
        &mut self.v[idx.min(len.saturating_sub(1))]
    }
}

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

fn to_isize(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

/// The divide part of a divide-and-conquer strategy. A D-path has D+1 snakes
/// some of which may be empty. The divide step requires finding the ceil(D/2) +
/// 1 or middle snake of an optimal D-path. The idea for doing so is to
/// simultaneously run the basic algorithm in both the forward and reverse
/// directions until furthest reaching forward and reverse paths starting at
/// opposing corners 'overlap'.
fn find_middle_snake<T>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)>
where
    T: PartialEq,
{
    let n = old_range.len();
    let m = new_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = to_isize(n) - to_isize(m);
    let odd = delta & 1 == 1;

    // The initial point at (0, -1)
    vf[1] = 0;
    // The initial point at (N, M+1)
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    debug_assert!(vf.len() >= d_max);
    debug_assert!(vb.len() >= d_max);

    for d in 0..to_isize(d_max) {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(to_isize(x) - k).unwrap_or(0);

            // The coordinate of the start of a snake
            let (x0, y0) = (x, y);
            // While these sequences are identical, keep moving through the
            // graph with no cost
            if x < old_range.len() && y < new_range.len() {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }

            vf[k] = x;

            // Only check for connections from the forward search when N - M is
            // odd and when there is a reciprocal k line coming from the other
            // direction.
            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(to_isize(x) - k).unwrap_or(0);

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<T>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<LineOperation>,
) where
    T: PartialEq,
{
    let common_prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    result.extend((0..common_prefix_len).map(|offset| LineOperation::Equal {
        old_index: old_range.start + offset,
        new_index: new_range.start + offset,
    }));
    old_range.start += common_prefix_len;
    new_range.start += common_prefix_len;

    let common_suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let common_suffix = (
        old_range.end - common_suffix_len,
        new_range.end - common_suffix_len,
    );
    old_range.end -= common_suffix_len;
    new_range.end -= common_suffix_len;

    if old_range.is_empty() && new_range.is_empty() {
        // do nothing
    } else if new_range.is_empty() {
        result.extend(old_range.map(|old_index| LineOperation::Delete { old_index }));
    } else if old_range.is_empty() {
        result.extend(new_range.map(|new_index| LineOperation::Insert { new_index }));
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        result.extend(old_range.map(|old_index| LineOperation::Delete { old_index }));
        result.extend(new_range.map(|new_index| LineOperation::Insert { new_index }));
    }

    result.extend((0..common_suffix_len).map(|offset| LineOperation::Equal {
        old_index: common_suffix.0 + offset,
        new_index: common_suffix.1 + offset,
    }));
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_diff() {
        let result = myers_diff::<&str>(&[], &[]);
        assert_eq!(result, vec![]);
    }

    #[test]
    fn test_identical_content() {
        let content = ["a", "b", "c"];
        let result = myers_diff(&content, &content);
        assert!(result.iter().all(|operation| matches!(operation, LineOperation::Equal { .. })));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_insert_only() {
        let result = myers_diff(&[], &["a", "b"]);
        assert_eq!(
            result,
            vec![
                LineOperation::Insert { new_index: 0 },
                LineOperation::Insert { new_index: 1 }
            ]
        );
    }

    #[test]
    fn test_delete_only() {
        let result = myers_diff(&["a", "b"], &[]);
        assert_eq!(
            result,
            vec![
                LineOperation::Delete { old_index: 0 },
                LineOperation::Delete { old_index: 1 }
            ]
        );
    }

    #[test]
    fn test_prefix_and_suffix() {
        let result = myers_diff(&["a", "b", "c", "d"], &["a", "x", "d"]);
        assert_debug_snapshot!(result, @r"
        [
            Equal {
                old_index: 0,
                new_index: 0,
            },
            Delete {
                old_index: 1,
            },
            Delete {
                old_index: 2,
            },
            Insert {
                new_index: 1,
            },
            Equal {
                old_index: 3,
                new_index: 2,
            },
        ]
        ");
    }

    #[test]
    fn test_every_line_is_accounted_for() {
        let old = ["a", "b", "c", "a", "b", "b", "a"];
        let new = ["c", "b", "a", "b", "a", "c"];
        let result = myers_diff(&old, &new);

        let old_count = result
            .iter()
            .filter(|operation| !matches!(operation, LineOperation::Insert { .. }))
            .count();
        let new_count = result
            .iter()
            .filter(|operation| !matches!(operation, LineOperation::Delete { .. }))
            .count();
        let equal_count = result
            .iter()
            .filter(|operation| matches!(operation, LineOperation::Equal { .. }))
            .count();

        assert_eq!(old_count, old.len());
        assert_eq!(new_count, new.len());
        // The shortest edit script of this classic example keeps 4 lines.
        assert_eq!(equal_count, 4);
    }
}
