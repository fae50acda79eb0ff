pub mod geom;
pub mod program;

#[cfg(test)]
mod tests;
