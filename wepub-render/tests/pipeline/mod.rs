mod code_blocks;
mod determinism;
mod references;
mod rendering;
