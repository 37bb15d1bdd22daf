/// Ports module defining the interfaces between the application core and
/// the outside world (file system, console, output formats).
pub mod outbound;
