use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

use cv_processor::types::{DocumentFormat, HtmlGenerationOptions, ProfileFormat};
use cv_processor::{
    assemble_document, generate_html, generate_markdown, normalize_profile, parse_profile_input,
    validate_profile,
};

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 输入的档案文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输出的文档文件路径。如果未提供，结果将打印到标准输出。
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 输出一个包含规范化档案的 JSON 文件路径
    #[arg(long)]
    json_output: Option<PathBuf>,

    // 输入档案的格式
    #[arg(long, value_enum, default_value_t = ProfileFormat::Json)]
    profile_format: ProfileFormat,

    // 输出文档的格式 ('html' 或 'markdown')
    #[arg(long, value_enum, default_value_t = DocumentFormat::Html)]
    document_format: DocumentFormat,

    /// 输出格式化（带缩进）的 HTML 文档
    #[arg(long)]
    format: bool,

    /// 将验证问题视为致命错误
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // 解析命令行参数
    let args = Args::parse();

    // --- 1. 读取输入文件 ---
    let profile_content = match fs::read_to_string(&args.input) {
        Ok(content) => content,
        Err(e) => {
            log::error!("无法读取输入文件 {:?}: {}", args.input, e);
            process::exit(1);
        }
    };

    // --- 2. 解析档案内容 ---
    log::info!("开始解析档案文件...");
    let raw_profile = match parse_profile_input(&profile_content, args.profile_format) {
        Ok(raw) => {
            log::info!("文件解析成功。");
            raw
        }
        Err(e) => {
            log::error!("解析档案文件失败: {}", e);
            process::exit(1);
        }
    };

    // --- 3. 规范化档案数据 ---
    let normalized = normalize_profile(&raw_profile);
    if !normalized.warnings.is_empty() {
        for warning in &normalized.warnings {
            log::warn!("规范化警告: {}", warning);
        }
    }
    let profile = normalized.profile;
    log::info!("档案数据规范化完毕。");

    // --- 4. 验证数据 ---
    log::info!("正在验证档案数据...");
    if let Err(problems) = validate_profile(&profile) {
        if args.strict {
            log::error!("档案验证失败，发现以下问题:");
            for problem in problems {
                eprintln!("- {}", problem);
            }
            process::exit(1);
        }
        for problem in problems {
            log::warn!("验证警告: {}", problem);
        }
    } else {
        log::info!("档案验证通过。");
    }

    if let Some(json_output_path) = &args.json_output {
        let json_string = match serde_json::to_string_pretty(&profile) {
            Ok(s) => s,
            Err(e) => {
                log::error!("序列化档案到 JSON 失败: {}", e);
                process::exit(1);
            }
        };

        if let Err(e) = fs::write(json_output_path, json_string) {
            log::error!("写入档案 JSON 文件 {:?} 失败: {}", json_output_path, e);
            process::exit(1);
        }
    }

    // --- 5. 组装并生成文档 ---
    log::info!("正在组装文档内容块...");
    let blocks = assemble_document(&profile);

    log::info!("正在生成文档...");
    let final_document = match args.document_format {
        DocumentFormat::Html => {
            let generation_options = HtmlGenerationOptions {
                format: args.format,
                ..Default::default()
            };
            generate_html(&blocks, &generation_options)
        }
        DocumentFormat::Markdown => generate_markdown(&blocks),
    };

    let final_document = match final_document {
        Ok(content) => content,
        Err(e) => {
            log::error!("生成文档失败: {}", e);
            process::exit(1);
        }
    };

    // --- 6. 输出结果 ---
    match args.output {
        Some(output_path) => {
            log::info!("正在将结果写入文件: {:?}", output_path);
            if let Err(e) = fs::write(&output_path, final_document) {
                log::error!("写入输出文件 {:?} 失败: {}", output_path, e);
                process::exit(1);
            }
            log::info!("处理成功！输出文件已保存。");
        }
        None => {
            log::info!("正在将结果打印到标准输出...");
            if let Err(e) = io::stdout().write_all(final_document.as_bytes()) {
                log::error!("写入标准输出失败: {}", e);
                process::exit(1);
            }
        }
    }
}
