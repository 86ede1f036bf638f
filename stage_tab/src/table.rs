//! Table artifact of one compression run
//! 单次压缩生成的表
//!
//! Lookup of key `k` / 查找键 `k`：
//!
//! ```text
//! v1  = stage1[k / block_size]
//! off = stage2_offsets[v1]            (if stage2_offsets) else v1
//! v2  = stage2[off + k % block_size]
//! val = stage3[v2]                    (if stage3) else v2
//! ```

use crate::{validate, width::Width};

/// Stage name, used in errors
/// 阶段名，用于错误信息
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageId {
  Stage1,
  Stage2Offsets,
  Stage2,
  Stage3,
}

/// One stage: elements and the width they are stored with
/// 单个阶段：元素与其存储宽度
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Stage {
  pub li: Vec<u64>,
  pub width: Width,
}

impl Stage {
  /// Stage stored with the minimal width of its elements
  /// 以元素最小宽度存储的阶段
  #[inline]
  pub fn new(li: Vec<u64>) -> Self {
    let width = Width::of_max(&li);
    Self { li, width }
  }

  #[inline]
  pub fn with_width(li: Vec<u64>, width: Width) -> Self {
    Self { li, width }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.li.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.li.is_empty()
  }
}

/// Multi-stage lookup table
/// 多级查找表
///
/// `stage2_offsets` exists only when stage1 needs the extra lookup,
/// `stage3` only when stage2 holds indexes instead of values.
/// `stage2_offsets` 仅在 stage1 需要额外查找时存在，`stage3` 仅在 stage2 存索引时存在。
#[cfg_attr(feature = "bitcode", derive(bitcode::Encode, bitcode::Decode))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
  pub block_size: usize,
  pub stage1: Stage,
  pub stage2_offsets: Option<Stage>,
  pub stage2: Stage,
  pub stage3: Option<Stage>,
  /// Sum of all present stages in bytes
  /// 所有存在阶段的总字节数
  pub total_size: usize,
}

/// Layout flags and element widths, what an emitter needs to pick types
/// 布局标志与元素宽度，供代码生成选择类型
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Format {
  pub stage1_needs_extra_lookup: bool,
  pub stage2_holds_values_inplace: bool,
  pub stage1_width: Width,
  pub stage2_offsets_width: Option<Width>,
  pub stage2_width: Width,
  pub stage3_width: Option<Width>,
}

impl Table {
  pub fn format(&self) -> Format {
    Format {
      stage1_needs_extra_lookup: self.stage2_offsets.is_some(),
      stage2_holds_values_inplace: self.stage3.is_none(),
      stage1_width: self.stage1.width,
      stage2_offsets_width: self.stage2_offsets.as_ref().map(|s| s.width),
      stage2_width: self.stage2.width,
      stage3_width: self.stage3.as_ref().map(|s| s.width),
    }
  }

  /// Value of `key`, None outside the covered range
  /// 查找 `key` 的值，超出覆盖范围返回 None
  #[inline]
  pub fn get(&self, key: usize) -> Option<u64> {
    validate::lookup(self, key).ok()
  }
}
