// Reports derived from the word list alone (never from the grid):
// tile counts and dictionary suggestions.

pub mod handlers;
pub mod suggestions;
pub mod tiles;
