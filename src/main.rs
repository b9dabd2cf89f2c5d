mod exits;
mod pass;
mod session;
mod settings;
mod strength;
mod terminal;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    session::run();
}
