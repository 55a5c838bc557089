use crate::common::BIN;

#[test]
fn gen_man_outputs_troff() {
  test_support::init_tracing();
  let mut cmd = test_support::cmd_bin(BIN);
  let out = cmd.args(["--gen-man"]).output().unwrap();
  assert!(out.status.success());
  let text = String::from_utf8_lossy(&out.stdout);
  // clap_mangen emits a roff manpage starting with .TH and mentions the binary name
  assert!(text.starts_with(".TH"), "expected troff man header");
  assert!(text.contains("acciones-diarias"));
  assert!(!text.contains("now-override"), "hidden flags stay out of the man page");
}
