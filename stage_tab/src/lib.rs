#![cfg_attr(docsrs, feature(doc_cfg))]

//! # stage_tab - Compact multi-stage lookup tables / 紧凑多级查找表
//!
//! Turns a dense per-key value sequence (e.g. a property of every Unicode
//! code point) into a two or three stage table with constant-time lookup,
//! choosing the layout and block size that minimize the stored bytes.
//! 将逐键的值序列（如每个 Unicode 码点的属性）转换为常数时间查找的两级或三级表，
//! 并选择使存储字节数最小的布局与块大小。
//!
//! Pipeline / 流程：
//! [`codec::split`] -> [`compact::compact`] -> [`layout::optimize`],
//! repeated over block sizes by [`tune::tune`], checked by
//! [`validate::validate`].
//!
//! ```rust
//! use stage_tab::{Width, build, validate};
//!
//! let values = [5, 5, 5, 5, 7, 7, 7, 7, 5, 5, 5, 5];
//! let table = build(&values, 4, Width::W1).unwrap();
//! assert_eq!(table.stage1.li, [0, 4, 0]);
//! validate(&values, &table).unwrap();
//! ```

pub mod codec;
pub mod compact;
pub mod conf;
pub mod error;
pub mod layout;
pub mod pack;
mod size;
pub mod table;
pub mod tune;
pub mod validate;
pub mod width;

pub use conf::{Conf, Config};
pub use error::{Error, Result};
pub use table::{Format, Stage, StageId, Table};
pub use tune::{Progress, Silent, tune};
pub use validate::validate;
pub use width::Width;

/// How to pick the block size
/// 块大小的选择方式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
  /// Search for the smallest table
  /// 搜索最小的表
  Tune,
  /// Use a block size known to be good for this input
  /// 使用已知适合该输入的块大小
  Fixed(usize),
}

impl Default for Mode {
  fn default() -> Self {
    Self::Fixed(conf::default::BLOCK_SIZE)
  }
}

/// Run the pipeline once with a fixed block size
/// 以固定块大小运行一次流程
pub fn build(values: &[u64], block_size: usize, width: Width) -> Result<Table> {
  let blocks = codec::split(values, block_size, width)?;
  let compact::Compact { stage1, stage2 } = compact::compact(&blocks)?;
  layout::optimize(block_size, stage1, stage2, blocks.stage3, width)
}

/// Build (tuned or fixed) and validate, the table is safe to emit on Ok
/// 构建（调优或固定）并校验，返回 Ok 时表可安全输出
pub fn generate(
  values: &[u64],
  width: Width,
  mode: Mode,
  conf: &[Conf],
  progress: &mut impl Progress,
) -> Result<Table> {
  let table = match mode {
    Mode::Tune => tune(values, width, &Config::from(conf), progress)?,
    Mode::Fixed(block_size) => build(values, block_size, width)?,
  };
  validate(values, &table)?;
  Ok(table)
}
