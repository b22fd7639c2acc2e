mod block_average;
mod state;
