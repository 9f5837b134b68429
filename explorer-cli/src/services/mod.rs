// Business logic services layer
//
// Pure engines and stores shared by every view. Nothing in here renders
// output; views and CLI handlers consume what these produce.

pub mod compare;
pub mod favorites;
pub mod filter;
pub mod format;
