//! Static reference tables shown alongside scan results.

use serde::Serialize;

/// Cheat sheet for one package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTutorial {
    pub name: &'static str,
    pub install_cmd: &'static str,
    pub search_cmd: &'static str,
    pub update_cmd: &'static str,
    pub tutorial_url: &'static str,
}

const fn tutorial(
    name: &'static str,
    install_cmd: &'static str,
    search_cmd: &'static str,
    update_cmd: &'static str,
    tutorial_url: &'static str,
) -> PackageTutorial {
    PackageTutorial {
        name,
        install_cmd,
        search_cmd,
        update_cmd,
        tutorial_url,
    }
}

const TUTORIALS: &[PackageTutorial] = &[
    tutorial(
        "npm (Node.js)",
        "npm install <package>",
        "npm search <keyword>",
        "npm update <package>",
        "https://docs.npmjs.com/",
    ),
    tutorial(
        "pip (Python)",
        "pip install <package>",
        "pip index versions <package>",
        "pip install --upgrade <package>",
        "https://pip.pypa.io/en/stable/",
    ),
    tutorial(
        "go (Go)",
        "go get <module>",
        "go list -m -versions <module>",
        "go get -u <module>",
        "https://go.dev/doc/modules/managing-dependencies",
    ),
    tutorial(
        "maven (Java)",
        "mvn install",
        "mvn dependency:get -Dartifact=<groupId>:<artifactId>:<version>",
        "mvn versions:use-latest-versions",
        "https://maven.apache.org/guides/getting-started/",
    ),
    tutorial(
        "nuget (.NET)",
        "dotnet add package <package>",
        "dotnet package search <keyword>",
        "dotnet add package <package> --version <version>",
        "https://learn.microsoft.com/nuget/",
    ),
    tutorial(
        "gem (Ruby)",
        "gem install <gem>",
        "gem search <keyword>",
        "gem update <gem>",
        "https://guides.rubygems.org/",
    ),
    tutorial(
        "composer (PHP)",
        "composer require <vendor/package>",
        "composer search <keyword>",
        "composer update <vendor/package>",
        "https://getcomposer.org/doc/",
    ),
    tutorial(
        "cargo (Rust)",
        "cargo add <crate>",
        "cargo search <keyword>",
        "cargo update <crate>",
        "https://doc.rust-lang.org/cargo/",
    ),
    tutorial(
        "elm (Elm)",
        "elm install <author/package>",
        "elm search <keyword>",
        "elm install <author/package>",
        "https://guide.elm-lang.org/install/elm.html",
    ),
    tutorial(
        "spago (PureScript)",
        "spago install <package>",
        "spago search <keyword>",
        "spago upgrade-set",
        "https://github.com/purescript/spago",
    ),
    tutorial(
        "pacman (J)",
        "load 'pacman'",
        "load 'pacman'\nrequire 'find'",
        "load 'pacman'\n'update' jpkg '*'",
        "https://code.jsoftware.com/wiki/Pacman",
    ),
    tutorial(
        "Pkg (Julia)",
        "using Pkg; Pkg.add(\"<package>\")",
        "using Pkg; Pkg.add(PackageSpec(name=\"<package>\"))",
        "using Pkg; Pkg.update(\"<package>\")",
        "https://pkgdocs.julialang.org/v1/",
    ),
    tutorial(
        "nimble (Nim)",
        "nimble install <package>",
        "nimble search <keyword>",
        "nimble install <package>@#head",
        "https://github.com/nim-lang/nimble#readme",
    ),
    tutorial(
        "shards (Crystal)",
        "shards install",
        "browse https://crystalshards.org/",
        "shards update",
        "https://crystal-lang.org/reference/man/shards/",
    ),
    tutorial(
        "zigmod (Zig)",
        "zigmod fetch",
        "browse https://astrolabe.pm/",
        "zigmod update",
        "https://github.com/nektro/zigmod",
    ),
    tutorial(
        "dub (D)",
        "dub add <package>",
        "dub search <keyword>",
        "dub upgrade",
        "https://dub.pm/getting_started",
    ),
];

/// Package manager tutorials.
pub fn tutorials() -> &'static [PackageTutorial] {
    TUTORIALS
}

/// An AI chat API the user can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiProvider {
    pub id: &'static str,
    pub name: &'static str,
    pub endpoint_url: &'static str,
    pub document_url: &'static str,
    pub api_key_header: &'static str,
    pub api_key_prefix: &'static str,
}

const AI_PROVIDERS: &[AiProvider] = &[
    AiProvider {
        id: "openai",
        name: "OpenAI (ChatGPT)",
        endpoint_url: "https://api.openai.com/v1/chat/completions",
        document_url: "https://platform.openai.com/docs/api-reference",
        api_key_header: "Authorization",
        api_key_prefix: "Bearer ",
    },
    AiProvider {
        id: "azure_openai",
        name: "Azure OpenAI",
        endpoint_url: "https://YOUR_RESOURCE_NAME.openai.azure.com/openai/deployments/YOUR_DEPLOYMENT_NAME/chat/completions?api-version=2023-05-15",
        document_url: "https://learn.microsoft.com/azure/ai-services/openai/reference",
        api_key_header: "api-key",
        api_key_prefix: "",
    },
    AiProvider {
        id: "anthropic",
        name: "Anthropic (Claude)",
        endpoint_url: "https://api.anthropic.com/v1/messages",
        document_url: "https://docs.anthropic.com/claude/reference/getting-started-with-the-api",
        api_key_header: "x-api-key",
        api_key_prefix: "",
    },
    AiProvider {
        id: "baidu",
        name: "Baidu ERNIE Bot",
        endpoint_url: "https://aip.baidubce.com/rpc/2.0/ai_custom/v1/wenxinworkshop/chat/completions",
        document_url: "https://cloud.baidu.com/doc/WENXINWORKSHOP/s/jlil56u11",
        api_key_header: "Authorization",
        api_key_prefix: "",
    },
    AiProvider {
        id: "aliyun",
        name: "Alibaba Tongyi Qianwen",
        endpoint_url: "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation",
        document_url: "https://help.aliyun.com/document_detail/2400395.html",
        api_key_header: "Authorization",
        api_key_prefix: "Bearer ",
    },
    AiProvider {
        id: "custom",
        name: "Custom API",
        endpoint_url: "",
        document_url: "",
        api_key_header: "Authorization",
        api_key_prefix: "Bearer ",
    },
];

/// Supported AI providers.
pub fn ai_providers() -> &'static [AiProvider] {
    AI_PROVIDERS
}

/// Look up a provider by id.
pub fn ai_provider(id: &str) -> Option<&'static AiProvider> {
    AI_PROVIDERS.iter().find(|p| p.id == id)
}

/// Host description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub cpus: usize,
}

impl SystemInfo {
    /// Describe the machine this process runs on.
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            cpus: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tutorials() {
        assert_eq!(tutorials().len(), 16);
        assert!(tutorials().iter().any(|t| t.name == "cargo (Rust)"));
        assert!(tutorials().iter().all(|t| t.tutorial_url.starts_with("https://")));
    }

    #[test]
    fn test_tutorial_json_shape() {
        let json = serde_json::to_value(tutorials()[0]).unwrap();
        assert_eq!(json["installCmd"], "npm install <package>");
        assert!(json.get("tutorialUrl").is_some());
    }

    #[test]
    fn test_ai_providers() {
        let ids: Vec<_> = ai_providers().iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec!["openai", "azure_openai", "anthropic", "baidu", "aliyun", "custom"]
        );
        assert_eq!(ai_provider("anthropic").unwrap().api_key_header, "x-api-key");
        assert!(ai_provider("deepseek").is_none());
    }

    #[test]
    fn test_system_info() {
        let info = SystemInfo::current();
        assert!(!info.os.is_empty());
        assert!(!info.arch.is_empty());
        assert!(info.cpus >= 1);
    }
}
