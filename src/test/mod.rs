mod dashboard;
mod format;
mod search;

#[cfg(test)]
mod support;
