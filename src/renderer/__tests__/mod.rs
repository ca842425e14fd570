#[cfg(test)]
mod placeholders;
