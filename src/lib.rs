pub mod carwash;
pub mod report;
pub mod sim;

#[cfg(test)]
mod test;
