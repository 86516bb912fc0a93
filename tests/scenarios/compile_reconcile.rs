//! Scenario: prepared descriptions are compiled and the tokenized outputs
//! are renamed to the names the game loads.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use mapprep::domain::ports::{AssetCompiler, CompileOutput, CompilerError, NoopEventSink};
use mapprep::infrastructure::{LocalFs, PngCropConverter};
use mapprep::{
    CompileOptions, CompileUseCase, ContentLayout, MapName, PrepareOptions, PrepareResult,
    PrepareUseCase,
};

use crate::common::*;

const SHOTS: &str = "panorama/images/map_icons/screenshots/1080p";

/// Writes `{stem}_{token}.vmat_c` and `{stem}_{token}.vtex_c` into the
/// compiled screenshots directory, failing on the listed asset indices.
struct FakeCompiler {
    out_dir: PathBuf,
    token: &'static str,
    fail_on: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeCompiler {
    fn new(layout: &ContentLayout, token: &'static str) -> Self {
        Self {
            out_dir: layout.compiled_screenshots_dir(),
            token,
            fail_on: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(mut self, stem: &str) -> Self {
        self.fail_on.push(stem.to_string());
        self
    }
}

impl AssetCompiler for &FakeCompiler {
    fn compile(&self, _working_dir: &Path, relative: &str) -> Result<CompileOutput, CompilerError> {
        self.calls.borrow_mut().push(relative.to_string());

        let stem = relative
            .rsplit('/')
            .next()
            .and_then(|f| f.strip_suffix(".vmat"))
            .unwrap()
            .to_string();

        if self.fail_on.contains(&stem) {
            return Err(CompilerError::Failed {
                code: Some(1),
                stdout: String::new(),
                stderr: "bad material".to_string(),
            });
        }

        std::fs::create_dir_all(&self.out_dir).unwrap();
        for ext in ["vmat_c", "vtex_c"] {
            let name = format!("{}_{}.{}", stem, self.token, ext);
            std::fs::write(self.out_dir.join(name), self.token).unwrap();
        }
        Ok(CompileOutput::default())
    }
}

fn layout(env: &TestEnv) -> ContentLayout {
    ContentLayout::new(env.content_root(), env.game_root())
}

fn prepare(env: &TestEnv) -> PrepareResult {
    prepare_map(env, "kz_test")
}

fn prepare_map(env: &TestEnv, map: &str) -> PrepareResult {
    write_standard_source(&env.source(), map);
    let options = PrepareOptions::new(MapName::parse(map).unwrap(), env.source(), layout(env));
    PrepareUseCase::new(LocalFs::new(), PngCropConverter::new())
        .execute(&options, &NoopEventSink)
        .unwrap()
}

fn compiled(env: &TestEnv, file: &str) -> PathBuf {
    env.game_path(&format!("{SHOTS}/{file}"))
}

#[test]
fn scenario_compile_renames_tokenized_artifacts() {
    let env = TestEnv::new();
    let prepared = prepare(&env);
    let compiler = FakeCompiler::new(&layout(&env), "abcd");

    let result = CompileUseCase::new(LocalFs::new(), &compiler).execute(
        &prepared.compilable(),
        &CompileOptions::new(layout(&env)),
        &NoopEventSink,
    );

    assert!(result.is_success(), "errors: {:?}", result.errors);
    assert_eq!(result.compiled.len(), 2);
    assert_eq!(result.renamed.len(), 4);

    for n in 1..=2 {
        assert!(compiled(&env, &format!("kz_test_{n}_png.vmat_c")).exists());
        assert!(compiled(&env, &format!("kz_test_{n}_png.vtex_c")).exists());
        assert!(!compiled(&env, &format!("kz_test_{n}_png_abcd.vmat_c")).exists());
    }

    // Paths are handed to the compiler relative to the content root
    assert_eq!(
        compiler.calls.borrow()[0],
        format!("{SHOTS}/kz_test_1_png.vmat")
    );
}

#[test]
fn scenario_recompile_replaces_previous_output() {
    let env = TestEnv::new();
    let prepared = prepare(&env);
    let options = CompileOptions::new(layout(&env));

    let first = FakeCompiler::new(&layout(&env), "aaaa");
    CompileUseCase::new(LocalFs::new(), &first).execute(
        &prepared.compilable(),
        &options,
        &NoopEventSink,
    );

    let second = FakeCompiler::new(&layout(&env), "bbbb");
    let result = CompileUseCase::new(LocalFs::new(), &second).execute(
        &prepared.compilable(),
        &options,
        &NoopEventSink,
    );

    assert!(result.is_success());
    assert!(result.renamed.iter().all(|r| r.replaced));

    // Last compile wins
    let content = std::fs::read_to_string(compiled(&env, "kz_test_1_png.vmat_c")).unwrap();
    assert_eq!(content, "bbbb");
}

#[test]
fn scenario_compile_failure_stops_the_batch() {
    let env = TestEnv::new();
    let prepared = prepare(&env);
    let compiler = FakeCompiler::new(&layout(&env), "abcd").failing_on("kz_test_1_png");

    let result = CompileUseCase::new(LocalFs::new(), &compiler).execute(
        &prepared.compilable(),
        &CompileOptions::new(layout(&env)),
        &NoopEventSink,
    );

    assert!(!result.is_success());
    let failure = result.aborted.as_ref().unwrap();
    assert_eq!(failure.index, 1);
    assert!(failure.error.contains("bad material"));
    assert_eq!(result.not_attempted, 1);

    // The second asset was never handed to the compiler
    assert_eq!(compiler.calls.borrow().len(), 1);
    assert!(!compiled(&env, "kz_test_2_png.vmat_c").exists());
}

#[test]
fn scenario_unrelated_compiled_files_are_untouched() {
    let env = TestEnv::new();
    let prepared = prepare(&env);
    let out_dir = layout(&env).compiled_screenshots_dir();
    std::fs::create_dir_all(&out_dir).unwrap();
    std::fs::write(out_dir.join("other_map_1_png_abcd.vmat_c"), "x").unwrap();

    let compiler = FakeCompiler::new(&layout(&env), "abcd");
    CompileUseCase::new(LocalFs::new(), &compiler).execute(
        &prepared.compilable(),
        &CompileOptions::new(layout(&env)),
        &NoopEventSink,
    );

    assert!(out_dir.join("other_map_1_png_abcd.vmat_c").exists());
    assert!(!out_dir.join("other_map_1_png.vmat_c").exists());
}

#[test]
fn scenario_map_name_with_png_segment_is_reconciled() {
    let env = TestEnv::new();
    let prepared = prepare_map(&env, "kz_png");
    let compiler = FakeCompiler::new(&layout(&env), "abcd");

    let result = CompileUseCase::new(LocalFs::new(), &compiler).execute(
        &prepared.compilable(),
        &CompileOptions::new(layout(&env)),
        &NoopEventSink,
    );

    assert!(result.is_success(), "errors: {:?}", result.errors);
    assert_eq!(result.renamed.len(), 4);
    assert!(compiled(&env, "kz_png_1_png.vmat_c").exists());
    assert!(compiled(&env, "kz_png_2_png.vtex_c").exists());
    assert!(!compiled(&env, "kz_png_1_png_abcd.vmat_c").exists());
}
