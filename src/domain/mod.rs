//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - ファイルやCLIについて何も知らない
//! - 純粋な計算とパース
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（SessionRecord, ActivityKindなど）
//! - **errors**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（パースと計算式）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
