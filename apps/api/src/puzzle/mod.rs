// Word-search puzzle engine and its HTTP surface.
// The engine (grid, packer, filler, generator) is synchronous and seedable;
// only the word source touches the network, and it does so through llm_client.

pub mod filler;
pub mod generator;
pub mod grid;
pub mod handlers;
pub mod packer;
pub mod prompts;
pub mod word_source;
