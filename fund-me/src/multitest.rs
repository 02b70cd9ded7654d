pub mod contract;
#[cfg(test)]
mod reentrant;
#[cfg(test)]
mod rejecting_bank;
