pub mod perform_logout;
