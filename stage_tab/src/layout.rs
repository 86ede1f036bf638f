//! Layout optimizer
//! 布局优化
//!
//! Two independent decisions, each taken only when strictly smaller:
//! 两个互相独立的决策，仅在严格更小时采用：
//!
//! 1. Indirection: stage1 stores indexes into a short table of unique stage2
//!    offsets, so stage1 can use a narrower type.
//!    间接寻址：stage1 存唯一偏移表的索引，从而使用更窄的类型。
//! 2. In place: stage2 stores the values themselves when they are no wider
//!    than the stage3 indexes, stage3 is dropped.
//!    就地存值：值不宽于 stage3 索引时 stage2 直接存值，去掉 stage3。

use log::trace;

use crate::{
  error::{Error, Result},
  size,
  table::{Stage, Table},
  width::Width,
};

/// Build the final table from raw stages
/// 由原始阶段构建最终表
///
/// `stage1`: offsets into `stage2`; `stage2`: indexes into `stage3`;
/// `width`: declared width of the values.
/// `stage1`：stage2 偏移；`stage2`：stage3 索引；`width`：值的声明宽度。
pub fn optimize(
  block_size: usize,
  stage1: Vec<u64>,
  stage2: Vec<u64>,
  stage3: Vec<u64>,
  width: Width,
) -> Result<Table> {
  let (stage1, stage2_offsets) = indirect(Stage::new(stage1))?;
  let (stage2, stage3) = inplace(Stage::new(stage2), stage3, width)?;
  let total_size = size::total(&stage1, stage2_offsets.as_ref(), &stage2, stage3.as_ref());
  Ok(Table {
    block_size,
    stage1,
    stage2_offsets,
    stage2,
    stage3,
    total_size,
  })
}

/// Move wide stage1 offsets into a unique offsets table if it saves bytes
/// 若能节省空间，将较宽的 stage1 偏移移入唯一偏移表
pub fn indirect(stage1: Stage) -> Result<(Stage, Option<Stage>)> {
  // Any index is at least one byte, nothing to gain
  if stage1.width == Width::W1 {
    return Ok((stage1, None));
  }

  let mut unique = stage1.li.clone();
  unique.sort_unstable();
  unique.dedup();

  let n = stage1.len();
  let narrow = Width::of(unique.len() as u64 - 1);
  let cur = n * stage1.width.bytes();
  let new = n * narrow.bytes() + unique.len() * stage1.width.bytes();
  trace!("indirect: {cur} -> {new} bytes, {} unique offsets", unique.len());
  if new >= cur {
    return Ok((stage1, None));
  }

  let li = stage1
    .li
    .iter()
    .map(|&offset| {
      unique
        .binary_search(&offset)
        .map(|i| i as u64)
        .map_err(|_| Error::OffsetNotFound { offset })
    })
    .collect::<Result<Vec<_>>>()?;

  let offsets = Stage::with_width(unique, stage1.width);
  Ok((Stage::with_width(li, narrow), Some(offsets)))
}

/// Store values in stage2 directly when they are no wider than its indexes
/// 值不宽于 stage2 索引时直接存入 stage2
pub fn inplace(stage2: Stage, stage3: Vec<u64>, width: Width) -> Result<(Stage, Option<Stage>)> {
  if width > stage2.width {
    return Ok((stage2, Some(Stage::with_width(stage3, width))));
  }

  let li = stage2
    .li
    .iter()
    .map(|&index| {
      usize::try_from(index)
        .ok()
        .and_then(|i| stage3.get(i))
        .copied()
        .ok_or(Error::MissingValue { index })
    })
    .collect::<Result<Vec<_>>>()?;

  Ok((Stage::with_width(li, width), None))
}
