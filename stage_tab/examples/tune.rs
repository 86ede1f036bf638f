use std::{io::Write, time::Instant};

use aok::{OK, Void};
use stage_tab::{
  Mode, Silent, Width, generate,
  pack::{Lane, pack_lanes},
};

// Block size search over case-mapping-like data
// Lanes: lowercase, uppercase, titlecase (simple mapping offset index or special index)

const BAR_LEN: usize = 60;

/// Offsets table the lane indexes point into: 0, +32, -32, +1, -1
fn lanes(cp: u32) -> [Lane; 3] {
  let none = [Lane::Simple(0); 3];
  match cp {
    0x41..=0x5A | 0xC0..=0xDE => [Lane::Simple(1), Lane::Simple(0), Lane::Simple(0)],
    0x61..=0x7A | 0xE0..=0xFE => [Lane::Simple(0), Lane::Simple(2), Lane::Simple(2)],
    0xDF => [Lane::Simple(0), Lane::Special(0), Lane::Special(1)],
    0x100..=0x17F | 0x1E00..=0x1EFF => {
      if cp % 2 == 0 {
        [Lane::Simple(3), Lane::Simple(0), Lane::Simple(0)]
      } else {
        [Lane::Simple(0), Lane::Simple(4), Lane::Simple(4)]
      }
    }
    0x391..=0x3A9 => [Lane::Simple(1), Lane::Simple(0), Lane::Simple(0)],
    0x3B1..=0x3C9 => [Lane::Simple(0), Lane::Simple(2), Lane::Simple(2)],
    0x10400..=0x10427 => [Lane::Simple(5), Lane::Simple(0), Lane::Simple(0)],
    0x10428..=0x1044F => [Lane::Simple(0), Lane::Simple(6), Lane::Simple(6)],
    0x1E900..=0x1E921 => [Lane::Simple(7), Lane::Simple(0), Lane::Simple(0)],
    0x1E922..=0x1E943 => [Lane::Simple(0), Lane::Simple(8), Lane::Simple(8)],
    _ => none,
  }
}

fn main() -> Void {
  log_init::init();

  println!("=== stage_tab block size search ===");

  let end = 0x1E944;
  let values = (0..end)
    .map(|cp| pack_lanes(&lanes(cp)))
    .collect::<stage_tab::Result<Vec<u64>>>()?;
  println!("{} code points, value width {:?}", values.len(), Width::W4);

  let start = Instant::now();
  let fixed = generate(&values, Width::W4, Mode::default(), &[], &mut Silent)?;
  println!(
    "fixed   : block_size {:>5}, {:>8} bytes, {:?}",
    fixed.block_size,
    fixed.total_size,
    start.elapsed()
  );

  let start = Instant::now();
  let mut flushed = Ok(());
  let mut bar = |done: usize, total: usize| {
    let n = BAR_LEN * done / total.max(1);
    print!(
      "\r[{}{}] {:6.2}%",
      "#".repeat(n),
      "-".repeat(BAR_LEN - n),
      done as f64 * 100.0 / total.max(1) as f64
    );
    if flushed.is_ok() {
      flushed = std::io::stdout().flush();
    }
  };
  let tuned = generate(&values, Width::W4, Mode::Tune, &[], &mut bar)?;
  flushed?;
  println!("\r{}", " ".repeat(BAR_LEN + 12));
  println!(
    "tuned   : block_size {:>5}, {:>8} bytes, {:?}",
    tuned.block_size,
    tuned.total_size,
    start.elapsed()
  );

  let format = tuned.format();
  println!("\n| {:^14} | {:^8} | {:^6} |", "stage", "len", "width");
  println!("|{:-<16}|{:-<10}|{:-<8}|", "-", "-", "-");
  println!("| {:<14} | {:<8} | {:<6} |", "stage1", tuned.stage1.len(), format.stage1_width.bytes());
  if let Some(s) = &tuned.stage2_offsets {
    println!("| {:<14} | {:<8} | {:<6} |", "stage2_offsets", s.len(), s.width.bytes());
  }
  println!("| {:<14} | {:<8} | {:<6} |", "stage2", tuned.stage2.len(), format.stage2_width.bytes());
  if let Some(s) = &tuned.stage3 {
    println!("| {:<14} | {:<8} | {:<6} |", "stage3", s.len(), s.width.bytes());
  }
  OK
}
