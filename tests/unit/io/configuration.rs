//! Tests for solver limits and command-line defaults

#[cfg(test)]
mod tests {
    use sockettile::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, DEFAULT_WIDTH, MAX_GRID_DIMENSION,
        MAX_INDIVIDUAL_PROGRESS_BARS, OPEN_SOCKET, PROGRESS_BAR_WIDTH, WALL_SOCKET,
    };

    // Tests maximum grid dimension value
    // Verified by reducing dimension limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    #[test]
    fn test_default_grid_size() {
        assert_eq!((DEFAULT_WIDTH, DEFAULT_HEIGHT), (12, 8));
        assert_eq!(DEFAULT_MAX_ATTEMPTS, 50);
    }

    // Wall and open labels must differ or every maze tile would match every other
    // Verified by setting both labels to the same value
    #[test]
    fn test_socket_labels_distinct() {
        assert_ne!(WALL_SOCKET, OPEN_SOCKET);
        assert_eq!(WALL_SOCKET, "1");
        assert_eq!(OPEN_SOCKET, "0");
    }

    // Tests progress bar settings
    // Verified by changing width value
    #[test]
    fn test_progress_bar_settings() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
    }
}
