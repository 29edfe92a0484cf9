// Reruns the build (and so regenerates the sample tests) whenever a sample changes.

fn main() {
    build_deps::rerun_if_changed_paths("samples/**").expect("Sample glob should be valid");
}
