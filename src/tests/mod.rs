use log::LevelFilter;

mod matcher_tests;
mod region_code;

pub(crate) fn get_engine() -> stub_engine::StubEngine {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(LevelFilter::Trace)
            .init()
    });
    stub_engine::StubEngine::new()
}
