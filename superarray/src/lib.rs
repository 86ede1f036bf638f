#![cfg_attr(docsrs, feature(doc_cfg))]

//! Greedy shortest common superarray
//! 贪心最短公共超数组
//!
//! Merges a list of arrays into one array that contains every input as a
//! contiguous run, overlapping suffixes with prefixes where possible.
//! 将多个数组合并为一个数组，每个输入都以连续片段出现，尽可能重叠后缀与前缀。
//!
//! Finding the true shortest superarray is NP-hard. [`merge`] uses the
//! classic greedy pairwise strategy, deterministic down to its tie-break, so
//! the same input always yields the same output.
//! 最短超数组是 NP 难问题。[`merge`] 使用经典贪心两两合并，平局规则确定，输出稳定。
//!
//! Memory: the pairwise overlap cache is `n * n` words for `n` input arrays.
//! 内存：重叠缓存为 `n * n` 个字。

mod find;
mod merge;
mod overlap;

pub use find::find;
pub use merge::merge;
pub use overlap::overlap;
