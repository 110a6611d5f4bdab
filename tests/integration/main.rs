mod cli_tests;
mod install_tests;
