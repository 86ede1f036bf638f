use log::trace;

use crate::overlap;

/// Merge arrays into one superarray by greedy pairwise overlap
/// 通过贪心两两重叠将数组合并为一个超数组
///
/// Each step picks the pair with the largest overlap (either direction),
/// first pair in `(i, j)` order wins ties. The pair is removed, the merged
/// array is appended, and the rest keep their order.
/// 每步选择重叠最大的一对（任一方向），平局取 `(i, j)` 顺序中的第一对。
/// 移除该对，合并结果追加到末尾，其余保持顺序。
pub fn merge<T: Eq + Clone>(mut li: Vec<Vec<T>>) -> Vec<T> {
  if li.len() <= 1 {
    return li.pop().unwrap_or_default();
  }

  // ov[i][j] = overlap(li[i], li[j])
  // ov[i][j] = li[i] 后缀与 li[j] 前缀的重叠
  let mut ov: Vec<Vec<usize>> = li
    .iter()
    .enumerate()
    .map(|(i, a)| {
      li.iter()
        .enumerate()
        .map(|(j, b)| if i == j { 0 } else { overlap(a, b) })
        .collect()
    })
    .collect();

  while li.len() > 1 {
    let n = li.len();
    let (mut bi, mut bj, mut best) = (0, 1, None);
    for i in 0..n {
      for j in i + 1..n {
        let olap = ov[i][j].max(ov[j][i]);
        if best.is_none_or(|b| olap > b) {
          (bi, bj, best) = (i, j, Some(olap));
        }
      }
    }

    let (ab, ba) = (ov[bi][bj], ov[bj][bi]);
    trace!("merge {bi} + {bj}, overlap {}", ab.max(ba));

    // bj > bi: remove the later one first
    let b = li.remove(bj);
    let a = li.remove(bi);
    ov.remove(bj);
    ov.remove(bi);
    for row in &mut ov {
      row.remove(bj);
      row.remove(bi);
    }

    let merged = if ab >= ba {
      let mut m = a;
      m.extend_from_slice(&b[ab..]);
      m
    } else {
      let mut m = b;
      m.extend_from_slice(&a[ba..]);
      m
    };

    for (row, x) in ov.iter_mut().zip(&li) {
      row.push(overlap(x, &merged));
    }
    let mut row: Vec<usize> = li.iter().map(|x| overlap(&merged, x)).collect();
    row.push(0);
    ov.push(row);
    li.push(merged);
  }

  li.pop().unwrap_or_default()
}
