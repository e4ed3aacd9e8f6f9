#[cfg(test)]
mod common;

#[cfg(test)]
mod list_tests;

#[cfg(test)]
mod submit_tests;

#[cfg(test)]
mod status_tests;

#[cfg(test)]
mod detail_tests;
