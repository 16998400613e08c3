#[cfg(test)]
mod test_framer;
#[cfg(test)]
mod test_trail;
