/// Length of the longest suffix of `a` that equals a prefix of `b`
/// `a` 的后缀与 `b` 的前缀相等的最大长度
///
/// Bounded by the shorter array, so a `b` fully contained at the end of `a`
/// overlaps by `b.len()`.
/// 上限为较短数组长度，`b` 完全位于 `a` 末尾时重叠为 `b.len()`。
#[inline]
pub fn overlap<T: Eq>(a: &[T], b: &[T]) -> usize {
  let max = a.len().min(b.len());
  (1..=max)
    .rev()
    .find(|&n| a[a.len() - n..] == b[..n])
    .unwrap_or(0)
}
