//! The built-in toolchain table.

use super::{Dependency, Recommendation, Toolchain, VersionCheck};
use crate::packages::{PackageSource, ToolEntry};

const fn run(program: &'static str, args: &'static [&'static str]) -> VersionCheck {
    VersionCheck::run(program, args)
}

const fn dep(display: &'static str, commands: &'static [&'static str]) -> Dependency {
    Dependency::new(display, commands)
}

const fn rec(name: &'static str, version: &'static str, description: &'static str) -> Recommendation {
    Recommendation::new(name, version, description)
}

const FRONTEND_TOOLS: &[ToolEntry] = &[
    ToolEntry::new("Sass", "sass", &["--version"]),
    ToolEntry::new("Less", "lessc", &["--version"]),
    ToolEntry::new("PostCSS", "postcss", &["--version"]),
    ToolEntry::new("Tailwind CSS", "tailwindcss", &["--help"]),
    ToolEntry::new("Stylus", "stylus", &["--version"]),
    ToolEntry::new("Prettier", "prettier", &["--version"]),
];

const SQL_CLIENTS: &[ToolEntry] = &[
    ToolEntry::new("MySQL", "mysql", &["--version"]),
    ToolEntry::new("PostgreSQL", "psql", &["--version"]),
    ToolEntry::new("SQLite", "sqlite3", &["--version"]),
    ToolEntry::new("SQL Server", "sqlcmd", &["-?"]),
    ToolEntry::new("MongoDB Shell", "mongosh", &["--version"]),
];

pub(super) const CATALOG: &[Toolchain] = &[
    Toolchain::new("Go", &[run("go", &["version"])])
        .package_manager("go get")
        .download_url("https://go.dev/dl/")
        .install_tutorial("https://go.dev/doc/install")
        .sources(&[PackageSource::GoModuleCache])
        .recommended(&[
            rec("github.com/gin-gonic/gin", "v1.9.1", "HTTP web framework"),
            rec("gorm.io/gorm", "v1.25.2", "ORM library"),
            rec("github.com/spf13/cobra", "v1.7.0", "CLI application framework"),
            rec("github.com/spf13/viper", "v1.16.0", "Configuration management"),
            rec("github.com/gofiber/fiber/v2", "v2.47.0", "Express-inspired web framework"),
        ]),
    Toolchain::new(
        "Python",
        &[run("python", &["--version"]), run("python3", &["--version"])],
    )
    .package_manager("pip")
    .download_url("https://www.python.org/downloads/")
    .install_tutorial("https://docs.python.org/3/using/index.html")
    .dependencies(&[dep("pip", &["pip", "pip3"])])
    .sources(&[PackageSource::Pip])
    .recommended(&[
        rec("numpy", "1.24.3", "Numerical computing"),
        rec("pandas", "2.0.2", "Data analysis"),
        rec("requests", "2.31.0", "HTTP client"),
        rec("flask", "2.3.2", "Lightweight web framework"),
        rec("django", "4.2.2", "Full-stack web framework"),
    ]),
    Toolchain::new("Node.js", &[run("node", &["--version"])])
        .package_manager("npm")
        .download_url("https://nodejs.org/en/download/")
        .install_tutorial("https://nodejs.org/en/learn/getting-started/how-to-install-nodejs")
        .dependencies(&[dep("npm", &["npm"])])
        .sources(&[PackageSource::NpmGlobal])
        .recommended(&[
            rec("express", "4.18.2", "Web framework"),
            rec("react", "18.2.0", "UI library"),
            rec("vue", "3.3.4", "Progressive UI framework"),
            rec("axios", "1.4.0", "Promise based HTTP client"),
            rec("typescript", "5.1.6", "Typed superset of JavaScript"),
        ]),
    Toolchain::new(
        "Java",
        &[run("java", &["--version"]), run("java", &["-version"])],
    )
    .package_manager("Maven/Gradle")
    .download_url("https://adoptium.net/")
    .install_tutorial("https://docs.oracle.com/en/java/javase/21/install/")
    .dependencies(&[dep("Maven", &["mvn"]), dep("Gradle", &["gradle"])])
    .sources(&[PackageSource::MavenRepository, PackageSource::GradleCache])
    .recommended(&[
        rec("spring-boot-starter", "3.1.1", "Spring Boot starter"),
        rec("junit", "5.9.3", "Unit testing"),
        rec("lombok", "1.18.28", "Boilerplate reduction"),
        rec("gson", "2.10.1", "JSON serialization"),
        rec("log4j", "2.20.0", "Logging"),
    ]),
    Toolchain::new("C#", &[run("dotnet", &["--version"])])
        .package_manager("NuGet")
        .download_url("https://dotnet.microsoft.com/download")
        .install_tutorial("https://learn.microsoft.com/dotnet/core/install/")
        .sources(&[PackageSource::DotnetTools])
        .recommended(&[
            rec("Newtonsoft.Json", "13.0.3", "JSON framework"),
            rec("Microsoft.EntityFrameworkCore", "7.0.8", "Object-relational mapper"),
            rec("AutoMapper", "12.0.1", "Object-object mapper"),
            rec("Serilog", "3.0.1", "Structured logging"),
            rec("xunit", "2.5.0", "Unit testing"),
        ]),
    Toolchain::new("Ruby", &[run("ruby", &["--version"])])
        .package_manager("gem")
        .download_url("https://www.ruby-lang.org/en/downloads/")
        .install_tutorial("https://www.ruby-lang.org/en/documentation/installation/")
        .dependencies(&[dep("RubyGems", &["gem"])])
        .sources(&[PackageSource::Gems])
        .recommended(&[
            rec("rails", "7.0.5", "Web application framework"),
            rec("sinatra", "3.0.6", "Web DSL"),
            rec("rspec", "3.12.0", "Behaviour-driven testing"),
            rec("puma", "6.3.0", "Web server"),
            rec("devise", "4.9.2", "Authentication"),
        ]),
    Toolchain::new("PHP", &[run("php", &["--version"])])
        .package_manager("Composer")
        .download_url("https://www.php.net/downloads")
        .install_tutorial("https://www.php.net/manual/en/install.php")
        .dependencies(&[dep("Composer", &["composer"])])
        .sources(&[PackageSource::ComposerGlobal])
        .extension_sources(&[PackageSource::PhpModules])
        .recommended(&[
            rec("laravel/framework", "v10.13.5", "Web application framework"),
            rec("symfony/symfony", "v6.3.0", "Web framework components"),
            rec("guzzlehttp/guzzle", "7.7.0", "HTTP client"),
            rec("phpunit/phpunit", "10.2.2", "Unit testing"),
            rec("doctrine/orm", "2.15.1", "Object-relational mapper"),
        ]),
    Toolchain::new("Rust", &[run("rustc", &["--version"])])
        .package_manager("cargo")
        .download_url("https://www.rust-lang.org/tools/install")
        .install_tutorial("https://doc.rust-lang.org/book/ch01-01-installation.html")
        .dependencies(&[dep("Cargo", &["cargo"])])
        .sources(&[PackageSource::CargoInstalls])
        .recommended(&[
            rec("tokio", "1.29.1", "Asynchronous runtime"),
            rec("serde", "1.0.164", "Serialization framework"),
            rec("actix-web", "4.3.1", "Web framework"),
            rec("clap", "4.3.10", "Command line argument parser"),
            rec("diesel", "2.1.0", "ORM and query builder"),
        ]),
    Toolchain::new(
        "C/C++",
        &[
            run("gcc", &["--version"]),
            run("clang", &["--version"]),
            VersionCheck::Present("cl"),
        ],
    )
    .package_manager("vcpkg/conan")
    .download_url("https://gcc.gnu.org/install/")
    .install_tutorial("https://code.visualstudio.com/docs/languages/cpp")
    .recommended(&[
        rec("boost", "1.82.0", "Peer-reviewed portable libraries"),
        rec("opencv", "4.7.0", "Computer vision"),
        rec("eigen", "3.4.0", "Linear algebra"),
        rec("qt", "6.5.1", "Cross-platform GUI"),
        rec("sfml", "2.6.0", "Multimedia library"),
    ]),
    Toolchain::new("Swift", &[run("swift", &["--version"])])
        .package_manager("Swift Package Manager")
        .download_url("https://www.swift.org/download/")
        .install_tutorial("https://www.swift.org/install/")
        .recommended(&[
            rec("Alamofire", "5.7.1", "HTTP networking"),
            rec("SwiftyJSON", "5.0.1", "JSON handling"),
            rec("Kingfisher", "7.8.1", "Image downloading and caching"),
            rec("SnapKit", "5.6.0", "Auto Layout DSL"),
            rec("RxSwift", "6.5.0", "Reactive programming"),
        ]),
    Toolchain::new("Kotlin", &[run("kotlin", &["-version"]), run("kotlinc", &["-version"])])
        .package_manager("Gradle")
        .download_url("https://kotlinlang.org/docs/command-line.html")
        .install_tutorial("https://kotlinlang.org/docs/getting-started.html")
        .sources(&[PackageSource::GradleCache])
        .recommended(&[
            rec("kotlinx.coroutines", "1.7.1", "Coroutines support"),
            rec("ktor", "2.3.1", "Asynchronous web framework"),
            rec("exposed", "0.41.1", "SQL framework"),
            rec("arrow-kt", "1.2.0", "Functional programming"),
            rec("koin", "3.4.0", "Dependency injection"),
        ]),
    Toolchain::new("Dart", &[run("dart", &["--version"])])
        .package_manager("pub")
        .download_url("https://dart.dev/get-dart")
        .install_tutorial("https://dart.dev/get-dart")
        .sources(&[PackageSource::DartGlobal])
        .recommended(&[
            rec("flutter", "3.10.5", "UI toolkit"),
            rec("http", "1.1.0", "HTTP client"),
            rec("provider", "6.0.5", "State management"),
            rec("dio", "5.2.1+1", "HTTP client with interceptors"),
            rec("hive", "2.2.3", "Key-value database"),
        ]),
    Toolchain::new("TypeScript", &[run("tsc", &["--version"])])
        .package_manager("npm")
        .download_url("https://www.typescriptlang.org/download")
        .install_tutorial("https://www.typescriptlang.org/docs/handbook/typescript-tooling-in-5-minutes.html")
        .dependencies(&[dep("npm", &["npm"])])
        .sources(&[PackageSource::NpmGlobal])
        .recommended(&[
            rec("typescript", "5.1.6", "Compiler"),
            rec("ts-node", "10.9.1", "TypeScript execution for Node.js"),
            rec("eslint", "8.43.0", "Linter"),
            rec("prettier", "3.0.0", "Code formatter"),
            rec("tslint", "6.1.3", "Legacy linter"),
        ]),
    Toolchain::new("Perl", &[run("perl", &["--version"])])
        .package_manager("cpan")
        .download_url("https://www.perl.org/get.html")
        .install_tutorial("https://learn.perl.org/installing/")
        .recommended(&[
            rec("Moose", "2.2015", "Object system"),
            rec("DBI", "1.643", "Database interface"),
            rec("Mojolicious", "9.31", "Real-time web framework"),
            rec("Dancer2", "0.400000", "Lightweight web framework"),
            rec("Catalyst", "5.90131", "MVC web framework"),
        ]),
    Toolchain::new("Lua", &[run("lua", &["-v"]), run("luajit", &["-v"])])
        .package_manager("LuaRocks")
        .download_url("https://www.lua.org/download.html")
        .install_tutorial("https://www.lua.org/start.html")
        .dependencies(&[dep("LuaRocks", &["luarocks"])])
        .sources(&[PackageSource::LuaRocks])
        .recommended(&[
            rec("luasocket", "3.1.0", "Network support"),
            rec("luafilesystem", "1.8.0", "File system access"),
            rec("penlight", "1.13.1", "General purpose libraries"),
            rec("luasql", "2.6.0", "Database connectivity"),
            rec("lua-cjson", "2.1.0", "Fast JSON encoding"),
        ]),
    Toolchain::new("R", &[run("R", &["--version"]), run("Rscript", &["--version"])])
        .package_manager("install.packages")
        .download_url("https://cran.r-project.org/")
        .install_tutorial("https://cran.r-project.org/doc/manuals/r-release/R-admin.html")
        .sources(&[PackageSource::RLibrary])
        .recommended(&[
            rec("ggplot2", "3.4.2", "Data visualization"),
            rec("dplyr", "1.1.2", "Data manipulation"),
            rec("tidyr", "1.3.0", "Data tidying"),
            rec("shiny", "1.7.4", "Interactive web apps"),
            rec("caret", "6.0-94", "Machine learning"),
        ]),
    Toolchain::new("MATLAB", &[VersionCheck::Present("matlab")])
        .package_manager("Add-On Explorer")
        .download_url("https://www.mathworks.com/downloads/")
        .install_tutorial("https://www.mathworks.com/help/install/")
        .recommended(&[
            rec("Signal Processing Toolbox", "R2023a", "Signal analysis"),
            rec("Statistics and Machine Learning Toolbox", "R2023a", "Statistics and ML"),
            rec("Image Processing Toolbox", "R2023a", "Image analysis"),
            rec("Optimization Toolbox", "R2023a", "Optimization solvers"),
            rec("Deep Learning Toolbox", "R2023a", "Neural networks"),
        ]),
    Toolchain::new("Scala", &[run("scala", &["-version"])])
        .package_manager("sbt")
        .download_url("https://www.scala-lang.org/download/")
        .install_tutorial("https://docs.scala-lang.org/getting-started/install-scala.html")
        .dependencies(&[dep("sbt", &["sbt"])])
        .recommended(&[
            rec("akka", "2.8.0", "Actor toolkit"),
            rec("play", "2.8.19", "Web framework"),
            rec("cats", "2.9.0", "Functional programming abstractions"),
            rec("spark", "3.4.1", "Distributed data processing"),
            rec("zio", "2.0.15", "Effect system"),
        ]),
    Toolchain::new("Haskell", &[run("ghc", &["--version"])])
        .package_manager("cabal/stack")
        .download_url("https://www.haskell.org/ghcup/")
        .install_tutorial("https://www.haskell.org/get-started/")
        .dependencies(&[dep("cabal/stack", &["cabal", "stack"])])
        .sources(&[PackageSource::GhcPkg])
        .recommended(&[
            rec("aeson", "2.1.2.1", "JSON parsing"),
            rec("servant", "0.19.1", "Type-level web APIs"),
            rec("lens", "5.2.2", "Functional references"),
            rec("pandoc", "3.1.3", "Document converter"),
            rec("yesod", "1.6.2.1", "Web framework"),
        ]),
    Toolchain::new("Objective-C", &[run("clang", &["--version"])])
        .package_manager("CocoaPods")
        .download_url("https://developer.apple.com/xcode/")
        .install_tutorial("https://guides.cocoapods.org/using/getting-started.html")
        .recommended(&[
            rec("AFNetworking", "4.0.1", "Networking"),
            rec("SDWebImage", "5.16.0", "Async image loading"),
            rec("MBProgressHUD", "1.2.0", "Progress indicator"),
            rec("Realm", "10.41.0", "Mobile database"),
            rec("Masonry", "1.1.0", "Auto Layout DSL"),
        ]),
    Toolchain::new("Groovy", &[run("groovy", &["--version"])])
        .package_manager("Grape")
        .download_url("https://groovy.apache.org/download.html")
        .install_tutorial("https://groovy-lang.org/install.html")
        .recommended(&[
            rec("spock-core", "2.3-groovy-4.0", "Testing framework"),
            rec("groovy-json", "4.0.12", "JSON support"),
            rec("groovy-xml", "4.0.12", "XML support"),
            rec("http-builder-ng-core", "1.0.4", "HTTP client"),
            rec("ratpack-groovy", "1.9.0", "Web framework"),
        ]),
    Toolchain::new(
        "Clojure",
        &[run("lein", &["version"]), run("clojure", &["--version"])],
    )
    .package_manager("Leiningen/deps.edn")
    .download_url("https://clojure.org/guides/install_clojure")
    .install_tutorial("https://clojure.org/guides/getting_started")
    .recommended(&[
        rec("ring", "1.10.0", "HTTP server abstraction"),
        rec("compojure", "1.7.0", "Routing library"),
        rec("hiccup", "2.0.0-alpha2", "HTML rendering"),
        rec("clj-http", "3.12.3", "HTTP client"),
        rec("core.async", "1.6.673", "Asynchronous channels"),
    ]),
    Toolchain::new("Elixir", &[run("elixir", &["--version"]), run("mix", &["--version"])])
        .package_manager("Hex/Mix")
        .download_url("https://elixir-lang.org/install.html")
        .install_tutorial("https://elixir-lang.org/getting-started/introduction.html")
        .recommended(&[
            rec("phoenix", "1.7.2", "Web framework"),
            rec("ecto", "3.10.1", "Database wrapper"),
            rec("absinthe", "1.7.1", "GraphQL toolkit"),
            rec("tesla", "1.7.0", "HTTP client"),
            rec("ex_machina", "2.7.0", "Test data factories"),
        ]),
    Toolchain::new("F#", &[run("dotnet", &["fsi", "--version"])])
        .package_manager("NuGet")
        .download_url("https://dotnet.microsoft.com/languages/fsharp")
        .install_tutorial("https://learn.microsoft.com/dotnet/fsharp/get-started/install-fsharp")
        .recommended(&[
            rec("FSharp.Core", "7.0.300", "Core library"),
            rec("Suave", "2.6.2", "Web server"),
            rec("FSharp.Data", "6.2.0", "Type providers for data access"),
            rec("Fable", "4.1.4", "F# to JavaScript compiler"),
            rec("Elmish", "4.0.1", "Elm architecture"),
        ]),
    Toolchain::new("Julia", &[run("julia", &["--version"])])
        .package_manager("Pkg")
        .download_url("https://julialang.org/downloads/")
        .install_tutorial("https://julialang.org/downloads/platform/")
        .recommended(&[
            rec("DataFrames", "1.5.0", "Tabular data"),
            rec("Plots", "1.38.12", "Plotting"),
            rec("Flux", "0.14.4", "Machine learning"),
            rec("DifferentialEquations", "7.7.0", "Differential equation solvers"),
            rec("JuMP", "1.11.1", "Mathematical optimization"),
        ]),
    Toolchain::new("Prolog", &[run("swipl", &["--version"])])
        .package_manager("SWI-Prolog Package Manager")
        .download_url("https://www.swi-prolog.org/Download.html")
        .install_tutorial("https://www.swi-prolog.org/build/")
        .recommended(&[
            rec("http", "latest", "HTTP server and client"),
            rec("clib", "latest", "C interface utilities"),
            rec("sgml", "latest", "SGML/XML parser"),
            rec("pce", "latest", "XPCE graphics"),
            rec("nlp", "latest", "Natural language processing"),
        ]),
    Toolchain::new(
        "Assembly",
        &[
            run("nasm", &["-v"]),
            run("as", &["--version"]),
            VersionCheck::Present("fasm"),
            run("yasm", &["--version"]),
        ],
    )
    .package_manager("N/A")
    .download_url("https://www.nasm.us/")
    .install_tutorial("https://www.nasm.us/doc/")
    .recommended(&[
        rec("NASM", "2.16.01", "Netwide Assembler"),
        rec("MASM", "latest", "Microsoft Macro Assembler"),
        rec("FASM", "1.73.30", "Flat Assembler"),
        rec("YASM", "1.3.0", "Modular assembler"),
        rec("GAS", "latest", "GNU Assembler"),
    ]),
    Toolchain::new("COBOL", &[run("cobc", &["--version"])])
        .package_manager("N/A")
        .download_url("https://gnucobol.sourceforge.io/")
        .install_tutorial("https://gnucobol.sourceforge.io/faq/")
        .recommended(&[
            rec("GnuCOBOL", "3.1.2", "Free COBOL compiler"),
            rec("OpenCOBOL", "latest", "Predecessor of GnuCOBOL"),
            rec("COBOL-IT", "latest", "Commercial compiler suite"),
        ]),
    Toolchain::new("Fortran", &[run("gfortran", &["--version"])])
        .package_manager("fpm")
        .download_url("https://gcc.gnu.org/wiki/GFortran")
        .install_tutorial("https://fortran-lang.org/learn/os_setup/install_gfortran/")
        .recommended(&[
            rec("LAPACK", "3.11.0", "Linear algebra"),
            rec("BLAS", "latest", "Basic linear algebra subprograms"),
            rec("NetCDF", "4.9.2", "Array-oriented scientific data"),
            rec("HDF5", "1.14.1", "Hierarchical data format"),
            rec("MPI", "latest", "Message passing interface"),
        ]),
    Toolchain::new("Delphi/Pascal", &[run("fpc", &["-i"])])
        .package_manager("GetIt")
        .download_url("https://www.freepascal.org/download.html")
        .install_tutorial("https://wiki.freepascal.org/Installing_the_Free_Pascal_Compiler")
        .recommended(&[
            rec("VCL", "latest", "Visual Component Library"),
            rec("FMX", "latest", "FireMonkey cross-platform UI"),
            rec("DUnitX", "latest", "Unit testing"),
            rec("Spring4D", "latest", "Collections and dependency injection"),
        ]),
    Toolchain::new(
        "Lisp",
        &[run("sbcl", &["--version"]), run("clisp", &["--version"])],
    )
    .package_manager("Quicklisp")
    .download_url("https://www.sbcl.org/platform-table.html")
    .install_tutorial("https://lisp-lang.org/learn/getting-started/")
    .recommended(&[
        rec("alexandria", "latest", "Utility library"),
        rec("cl-ppcre", "latest", "Regular expressions"),
        rec("bordeaux-threads", "latest", "Portable threads"),
        rec("hunchentoot", "latest", "Web server"),
        rec("quicklisp", "latest", "Library manager"),
    ]),
    Toolchain::new(
        "Scheme",
        &[
            run("scheme", &["--version"]),
            run("guile", &["--version"]),
            run("racket", &["--version"]),
        ],
    )
    .package_manager("Akku")
    .download_url("https://www.scheme.com/download/")
    .install_tutorial("https://www.scheme.com/tspl4/")
    .recommended(&[
        rec("chez-scheme", "9.5.8", "Chez Scheme implementation"),
        rec("racket", "8.9", "Racket language"),
        rec("guile", "3.0.9", "GNU Scheme implementation"),
    ]),
    Toolchain::new("Crystal", &[run("crystal", &["--version"])])
        .package_manager("shards")
        .download_url("https://crystal-lang.org/install/")
        .install_tutorial("https://crystal-lang.org/reference/getting_started/")
        .recommended(&[
            rec("kemal", "1.4.0", "Web framework"),
            rec("lucky", "1.0.0", "Full-stack web framework"),
            rec("amber", "0.36.0", "MVC web framework"),
        ]),
    Toolchain::new("Nim", &[run("nim", &["--version"])])
        .package_manager("nimble")
        .download_url("https://nim-lang.org/install.html")
        .install_tutorial("https://nim-lang.org/docs/tut1.html")
        .dependencies(&[dep("nimble", &["nimble"])])
        .sources(&[PackageSource::Nimble])
        .recommended(&[
            rec("jester", "0.5.0", "Web framework"),
            rec("karax", "1.2.2", "Single page applications"),
            rec("nimx", "0.3.0", "Cross-platform GUI"),
        ]),
    Toolchain::new(
        "D",
        &[
            run("dmd", &["--version"]),
            run("ldc2", &["--version"]),
            run("gdc", &["--version"]),
        ],
    )
    .package_manager("dub")
    .download_url("https://dlang.org/download.html")
    .install_tutorial("https://tour.dlang.org/tour/en/welcome/install-d-locally")
    .recommended(&[
        rec("vibe-d", "0.9.5", "Asynchronous I/O and web framework"),
        rec("mir-algorithm", "3.20.0", "Numerical algorithms"),
        rec("dxml", "0.4.3", "XML parser"),
    ]),
    Toolchain::new("Ada", &[run("gnat", &["--version"])])
        .package_manager("Alire")
        .download_url("https://alire.ada.dev/")
        .install_tutorial("https://ada-lang.io/docs/learn/getting-started/installation")
        .recommended(&[
            rec("gnatcoll", "23.0.0", "GNAT components collection"),
            rec("aws", "23.0.0", "Ada Web Server"),
            rec("aunit", "23.0.0", "Unit testing"),
        ]),
    Toolchain::new("VHDL", &[run("ghdl", &["--version"])])
        .package_manager("N/A")
        .download_url("https://github.com/ghdl/ghdl/releases")
        .install_tutorial("https://ghdl.github.io/ghdl/getting.html")
        .recommended(&[
            rec("GHDL", "3.0.0", "Open-source simulator"),
            rec("ModelSim", "latest", "HDL simulator"),
            rec("Vivado", "latest", "FPGA design suite"),
        ]),
    Toolchain::new(
        "Erlang",
        &[run(
            "erl",
            &[
                "-eval",
                "io:format(\"~s~n\", [erlang:system_info(otp_release)]), halt().",
                "-noshell",
            ],
        )],
    )
    .package_manager("rebar3")
    .download_url("https://www.erlang.org/downloads")
    .install_tutorial("https://www.erlang.org/docs/installation_guide")
    .recommended(&[
        rec("cowboy", "2.10.0", "HTTP server"),
        rec("lager", "3.9.2", "Logging framework"),
        rec("jiffy", "1.1.1", "JSON parser"),
    ]),
    Toolchain::new("Smalltalk", &[run("gst", &["--version"])])
        .package_manager("Monticello")
        .download_url("https://pharo.org/download")
        .install_tutorial("https://www.gnu.org/software/smalltalk/manual/")
        .recommended(&[
            rec("Squeak", "6.0", "Smalltalk environment"),
            rec("Pharo", "10.0", "Modern Smalltalk"),
            rec("GNU Smalltalk", "3.2.5", "Scripting-oriented Smalltalk"),
        ]),
    Toolchain::new("OCaml", &[run("ocaml", &["-version"])])
        .package_manager("OPAM")
        .download_url("https://ocaml.org/install")
        .install_tutorial("https://ocaml.org/docs/installing-ocaml")
        .dependencies(&[dep("OPAM", &["opam"])])
        .sources(&[PackageSource::Opam])
        .recommended(&[
            rec("core", "v0.15.1", "Standard library replacement"),
            rec("dune", "3.7.0", "Build system"),
            rec("lwt", "5.6.1", "Cooperative threads"),
        ]),
    Toolchain::new("Tcl", &[VersionCheck::Present("tclsh")])
        .package_manager("Teapot")
        .download_url("https://www.tcl.tk/software/tcltk/download.html")
        .install_tutorial("https://wiki.tcl-lang.org/page/Getting+Started")
        .recommended(&[
            rec("Tk", "8.6.12", "GUI toolkit"),
            rec("Expect", "5.45.4", "Interactive program automation"),
            rec("TclOO", "1.1.0", "Object system"),
        ]),
    Toolchain::new("Bash", &[run("bash", &["--version"])])
        .package_manager("N/A")
        .download_url("https://www.gnu.org/software/bash/")
        .install_tutorial("https://www.gnu.org/software/bash/manual/")
        .recommended(&[
            rec("coreutils", "latest", "Basic file and text utilities"),
            rec("findutils", "latest", "File searching"),
            rec("grep", "latest", "Pattern matching"),
            rec("sed", "latest", "Stream editor"),
            rec("awk", "latest", "Text processing language"),
        ]),
    Toolchain::new(
        "PowerShell",
        &[
            run("pwsh", &["-NoProfile", "-Command", "$PSVersionTable.PSVersion.ToString()"]),
            run(
                "powershell",
                &["-NoProfile", "-Command", "$PSVersionTable.PSVersion.ToString()"],
            ),
        ],
    )
    .package_manager("PowerShellGet")
    .download_url("https://github.com/PowerShell/PowerShell/releases")
    .install_tutorial("https://learn.microsoft.com/powershell/scripting/install/installing-powershell")
    .recommended(&[
        rec("PSReadLine", "2.2.6", "Command line editing"),
        rec("Az", "9.3.0", "Azure management"),
        rec("AWS.Tools.Common", "4.1.118", "AWS management"),
        rec("ImportExcel", "7.8.5", "Excel without Excel"),
        rec("Pester", "5.4.1", "Testing framework"),
    ]),
    Toolchain::new(
        "VBA",
        &[
            VersionCheck::Directory("C:\\Program Files\\Microsoft Office"),
            VersionCheck::Directory("C:\\Program Files (x86)\\Microsoft Office"),
        ],
    )
    .package_manager("References")
    .download_url("https://www.microsoft.com/microsoft-365")
    .install_tutorial("https://learn.microsoft.com/office/vba/library-reference/concepts/getting-started-with-vba-in-office")
    .recommended(&[
        rec("Microsoft Excel Object Library", "latest", "Excel automation"),
        rec("Microsoft Office Object Library", "latest", "Shared Office objects"),
        rec("Microsoft Scripting Runtime", "latest", "File system and dictionaries"),
    ]),
    Toolchain::new(
        "SQL",
        &[
            run("mysql", &["--version"]),
            run("psql", &["--version"]),
            run("sqlite3", &["--version"]),
            VersionCheck::Present("sqlcmd"),
        ],
    )
    .package_manager("N/A")
    .download_url("https://www.postgresql.org/download/")
    .install_tutorial("https://www.sqlite.org/quickstart.html")
    .sources(&[PackageSource::Tools(SQL_CLIENTS)])
    .recommended(&[
        rec("MySQL", "8.0.33", "Relational database"),
        rec("PostgreSQL", "15.3", "Object-relational database"),
        rec("SQLite", "3.42.0", "Embedded database"),
        rec("SQL Server", "2022", "Microsoft database server"),
    ]),
    Toolchain::new("HTML/CSS", &[VersionCheck::Always("HTML5 / CSS3")])
        .package_manager("npm/yarn")
        .download_url("https://developer.mozilla.org/docs/Web/HTML")
        .install_tutorial("https://developer.mozilla.org/docs/Learn")
        .sources(&[PackageSource::Tools(FRONTEND_TOOLS)])
        .recommended(&[
            rec("Bootstrap", "5.3.0", "CSS framework"),
            rec("Tailwind CSS", "3.3.2", "Utility-first CSS"),
            rec("Sass", "1.62.1", "CSS preprocessor"),
            rec("Less", "4.1.3", "CSS preprocessor"),
            rec("PostCSS", "8.4.24", "CSS transformations"),
        ]),
    Toolchain::new("Apex", &[run("sfdx", &["--version"]), run("sf", &["--version"])])
        .package_manager("Salesforce CLI")
        .download_url("https://developer.salesforce.com/tools/salesforcecli")
        .install_tutorial("https://developer.salesforce.com/docs/atlas.en-us.sfdx_setup.meta/sfdx_setup/")
        .recommended(&[
            rec("Salesforce CLI", "latest", "Command line tooling"),
            rec("Salesforce Extensions for VS Code", "latest", "Editor support"),
        ]),
    Toolchain::new("Solidity", &[run("solc", &["--version"])])
        .package_manager("npm")
        .download_url("https://docs.soliditylang.org/en/latest/installing-solidity.html")
        .install_tutorial("https://docs.soliditylang.org/")
        .recommended(&[
            rec("solc", "0.8.19", "Compiler"),
            rec("truffle", "5.9.2", "Development environment"),
            rec("hardhat", "2.16.1", "Ethereum development environment"),
        ]),
    Toolchain::new(
        "WebAssembly",
        &[run("emcc", &["--version"]), run("wasm-pack", &["--version"])],
    )
    .package_manager("N/A")
    .download_url("https://emscripten.org/docs/getting_started/downloads.html")
    .install_tutorial("https://webassembly.org/getting-started/developers-guide/")
    .recommended(&[
        rec("emscripten", "3.1.42", "C/C++ to WebAssembly"),
        rec("wasm-pack", "0.12.0", "Rust to WebAssembly workflow"),
        rec("wabt", "1.0.33", "WebAssembly binary toolkit"),
    ]),
    Toolchain::new("Zig", &[run("zig", &["version"])])
        .package_manager("zig build")
        .download_url("https://ziglang.org/download/")
        .install_tutorial("https://ziglang.org/learn/getting-started/")
        .recommended(&[
            rec("zls", "latest", "Language server"),
            rec("zigmod", "latest", "Package manager"),
            rec("gyro", "latest", "Package manager"),
        ]),
    Toolchain::new("Haxe", &[run("haxe", &["--version"])])
        .package_manager("haxelib")
        .download_url("https://haxe.org/download/")
        .install_tutorial("https://haxe.org/manual/introduction.html")
        .recommended(&[
            rec("openfl", "9.2.1", "Flash API reimplementation"),
            rec("lime", "8.0.1", "Cross-platform layer"),
            rec("heaps", "1.10.0", "Game engine"),
        ]),
    Toolchain::new(
        "ABAP",
        &[
            VersionCheck::Directory("C:\\Program Files\\SAP"),
            VersionCheck::Directory("C:\\Program Files (x86)\\SAP"),
        ],
    )
    .package_manager("ABAP Package Manager")
    .download_url("https://developers.sap.com/trials-downloads.html")
    .install_tutorial("https://developers.sap.com/topics/abap-platform.html")
    .recommended(&[
        rec("abapGit", "latest", "Git client for ABAP"),
        rec("ABAP SDK for Google Cloud", "latest", "Google Cloud integration"),
    ]),
    Toolchain::new("ActionScript", &[VersionCheck::Present("animate"), VersionCheck::Present("mxmlc")])
        .package_manager("N/A")
        .download_url("https://flex.apache.org/download-binaries.html")
        .install_tutorial("https://flex.apache.org/doc-getstarted.html")
        .recommended(&[
            rec("Apache Flex", "4.16.1", "Application framework"),
            rec("FlashDevelop", "5.3.3", "IDE"),
        ]),
    Toolchain::new("APL", &[VersionCheck::Present("dyalog"), run("apl", &["--version"])])
        .package_manager("N/A")
        .download_url("https://www.dyalog.com/download-zone.htm")
        .install_tutorial("https://aplwiki.com/wiki/Running_APL")
        .recommended(&[
            rec("Dyalog APL", "18.2", "Commercial APL"),
            rec("GNU APL", "1.8", "Free APL interpreter"),
        ]),
    Toolchain::new("Ballerina", &[run("bal", &["version"])])
        .package_manager("Ballerina Central")
        .download_url("https://ballerina.io/downloads/")
        .install_tutorial("https://ballerina.io/learn/get-started/")
        .recommended(&[
            rec("ballerina/http", "latest", "HTTP services"),
            rec("ballerina/io", "latest", "I/O operations"),
            rec("ballerina/mysql", "latest", "MySQL connector"),
        ]),
    Toolchain::new("BASIC", &[run("fbc", &["-version"]), VersionCheck::Present("qb64")])
        .package_manager("N/A")
        .download_url("https://www.freebasic.net/")
        .install_tutorial("https://www.freebasic.net/wiki/CompilerInstalling")
        .recommended(&[
            rec("FreeBASIC", "1.10.0", "BASIC compiler"),
            rec("QB64", "latest", "QuickBASIC compatible compiler"),
            rec("SmallBASIC", "12.24", "BASIC interpreter"),
        ]),
    Toolchain::new("Boo", &[run("booc", &["-version"])])
        .package_manager("NuGet")
        .download_url("https://github.com/boo-lang/boo/releases")
        .install_tutorial("https://github.com/boo-lang/boo/wiki")
        .recommended(&[
            rec("Boo.Lang", "2.0.9999.3", "Runtime library"),
            rec("Boo.Lang.Compiler", "2.0.9999.3", "Compiler library"),
        ]),
    Toolchain::new("Ceylon", &[run("ceylon", &["--version"])])
        .package_manager("Ceylon Herd")
        .download_url("https://ceylon-lang.org/download/")
        .install_tutorial("https://ceylon-lang.org/documentation/")
        .recommended(&[
            rec("ceylon.collection", "1.3.3", "Collections"),
            rec("ceylon.http", "1.3.3", "HTTP support"),
            rec("ceylon.json", "1.3.3", "JSON support"),
        ]),
    Toolchain::new("CoffeeScript", &[run("coffee", &["--version"])])
        .package_manager("npm")
        .download_url("https://coffeescript.org/#installation")
        .install_tutorial("https://coffeescript.org/")
        .dependencies(&[dep("npm", &["npm"])])
        .recommended(&[
            rec("coffeescript", "2.7.0", "Compiler"),
            rec("coffeelint", "2.1.0", "Linter"),
        ]),
    Toolchain::new("Elm", &[run("elm", &["--version"])])
        .package_manager("elm-package")
        .download_url("https://guide.elm-lang.org/install/elm.html")
        .install_tutorial("https://guide.elm-lang.org/")
        .recommended(&[
            rec("elm/core", "1.0.5", "Core library"),
            rec("elm/browser", "1.0.2", "Browser programs"),
            rec("elm/html", "1.0.0", "HTML rendering"),
            rec("elm/json", "1.1.3", "JSON decoding"),
            rec("elm/http", "2.0.0", "HTTP requests"),
        ]),
    Toolchain::new("Hack", &[run("hhvm", &["--version"])])
        .package_manager("Composer")
        .download_url("https://docs.hhvm.com/hhvm/installation/introduction")
        .install_tutorial("https://docs.hhvm.com/hack/getting-started/getting-started")
        .recommended(&[
            rec("hhvm/hhvm-autoload", "3.3.0", "Autoloader"),
            rec("hhvm/hsl", "4.108.1", "Hack standard library"),
            rec("facebook/fbexpect", "2.10.0", "Test assertions"),
        ]),
    Toolchain::new("J", &[run("jconsole", &["-js", "echo JVERSION", "exit 0"])])
        .package_manager("pacman")
        .download_url("https://code.jsoftware.com/wiki/System/Installation")
        .install_tutorial("https://code.jsoftware.com/wiki/Guides/Getting_Started")
        .recommended(&[
            rec("math/misc", "latest", "Math utilities"),
            rec("graphics/plot", "latest", "Plotting"),
            rec("tables/csv", "latest", "CSV files"),
        ]),
    Toolchain::new("Jython", &[run("jython", &["--version"])])
        .package_manager("pip/easy_install")
        .download_url("https://www.jython.org/download")
        .install_tutorial("https://www.jython.org/installation")
        .recommended(&[
            rec("django", "1.11.29", "Web framework"),
            rec("requests", "2.25.1", "HTTP client"),
        ]),
    Toolchain::new("LOLCODE", &[VersionCheck::Present("lci")])
        .package_manager("N/A")
        .download_url("https://github.com/justinmeza/lci")
        .install_tutorial("https://github.com/justinmeza/lci#installation")
        .recommended(&[rec("lci", "0.11.2", "LOLCODE interpreter")]),
    Toolchain::new("PureScript", &[run("purs", &["--version"])])
        .package_manager("spago")
        .download_url("https://github.com/purescript/purescript/releases")
        .install_tutorial("https://github.com/purescript/documentation/blob/master/guides/Getting-Started.md")
        .recommended(&[
            rec("purescript-prelude", "6.0.1", "Standard prelude"),
            rec("purescript-effect", "4.0.0", "Native effects"),
            rec("purescript-console", "6.0.0", "Console logging"),
            rec("purescript-aff", "7.1.0", "Asynchronous effects"),
            rec("purescript-halogen", "7.0.0", "UI library"),
        ]),
    Toolchain::new("Q#", &[run("dotnet", &["new", "--list", "qsharp"])])
        .package_manager("NuGet")
        .download_url("https://learn.microsoft.com/azure/quantum/install-overview-qdk")
        .install_tutorial("https://learn.microsoft.com/azure/quantum/")
        .recommended(&[
            rec("Microsoft.Quantum.Standard", "0.28.302812", "Standard library"),
            rec("Microsoft.Quantum.Development.Kit", "0.28.302812", "Development kit"),
            rec("Microsoft.Quantum.Numerics", "0.28.302812", "Numerics library"),
        ]),
    Toolchain::new("Red", &[VersionCheck::Present("red")])
        .package_manager("Red Package Manager")
        .download_url("https://www.red-lang.org/p/download.html")
        .install_tutorial("https://github.com/red/docs/blob/master/en/SUMMARY.adoc")
        .recommended(&[
            rec("view", "latest", "GUI dialect"),
            rec("parse", "latest", "Parsing dialect"),
        ]),
    Toolchain::new("ReScript", &[run("rescript", &["-v"]), run("bsc", &["-v"])])
        .package_manager("npm")
        .download_url("https://rescript-lang.org/docs/manual/latest/installation")
        .install_tutorial("https://rescript-lang.org/docs/manual/latest/introduction")
        .recommended(&[
            rec("rescript", "10.1.4", "Compiler"),
            rec("@rescript/react", "0.11.0", "React bindings"),
            rec("@rescript/core", "0.5.0", "Standard library"),
        ]),
    Toolchain::new("Scratch", &[VersionCheck::Present("scratch-desktop")])
        .package_manager("N/A")
        .download_url("https://scratch.mit.edu/download")
        .install_tutorial("https://scratch.mit.edu/ideas")
        .recommended(&[rec("Scratch Desktop", "3.29.1", "Offline editor")]),
    Toolchain::new("Vala", &[run("valac", &["--version"])])
        .package_manager("Meson")
        .download_url("https://vala.dev/")
        .install_tutorial("https://wiki.gnome.org/Projects/Vala/Tutorial")
        .recommended(&[
            rec("glib-2.0", "2.76.3", "Core application library"),
            rec("gtk+-3.0", "3.24.38", "GUI toolkit"),
            rec("json-glib-1.0", "1.6.6", "JSON support"),
        ]),
    Toolchain::new(
        "XSLT",
        &[run("xsltproc", &["--version"]), VersionCheck::Present("saxon")],
    )
    .package_manager("N/A")
    .download_url("https://gitlab.gnome.org/GNOME/libxslt")
    .install_tutorial("https://developer.mozilla.org/docs/Web/XSLT")
    .recommended(&[
        rec("libxslt", "1.1.37", "XSLT C library"),
        rec("Saxon-HE", "11.4", "XSLT processor"),
    ]),
];
