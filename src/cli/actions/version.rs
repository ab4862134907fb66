use crate::{GIT_COMMIT_HASH, built_info};

#[must_use]
pub fn describe() -> String {
    format!(
        "{} {} ({})\ntarget: {}\nrustc: {}\nprofile: {}",
        built_info::PKG_NAME,
        built_info::PKG_VERSION,
        GIT_COMMIT_HASH,
        built_info::TARGET,
        built_info::RUSTC_VERSION,
        built_info::PROFILE,
    )
}

pub fn execute() {
    println!("{}", describe());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_package_and_version() {
        let text = describe();
        assert!(text.starts_with(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }
}
