// entry program
pub mod vproj;

// commands
mod build;
mod help;
mod list;
mod new;
mod report;
mod show;
mod template;

// informational content for help about commands
mod helps;
mod manuals;
