

#[cfg(test)]
pub mod tests {
    use tracing_subscriber::EnvFilter;

    #[ctor::ctor]
    fn init_logging() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lexa_reader=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_file(true)
            .with_line_number(true)
            .with_test_writer()
            .try_init();
    }
}
