pub mod breakout;
pub mod util;

#[cfg(test)]
#[ctor::ctor]
fn init() {
    util::init_test_logging();
}
