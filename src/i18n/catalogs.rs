use super::{Catalog, Language};

pub(super) static ENGLISH: Catalog = Catalog {
    language: Language::English,
    usage: "\
{program}

Download a YouTube video and convert it into a GIF using only yt-dlp and ffmpeg.
System dependencies (install if you don't have them):
    sudo apt install yt-dlp ffmpeg

Usage:
    {program} URL [start_sec] [duration_sec] [output.gif]

Example:
    {program} https://youtu.be/kX8hfK0PrHM 10 5 clip.gif",
    error_label: "ERROR:",
    tool_not_found: "'{tool}' not found. Install with: {install}",
    command_failed: "command failed: {command} (rc={code})",
    workspace_failed: "could not create temporary directory: {reason}",
    interrupted: "interrupted, temporary files removed",
    missing_url: "missing required argument: URL",
    saved: "✔ GIF saved to: {path}",
};

static ITALIAN: Catalog = Catalog {
    language: Language::Italian,
    usage: "\
{program}

Scarica un video YouTube e lo converte in una GIF, usando solo yt-dlp e ffmpeg.
Dipendenze di sistema (installali se non ce li hai):
    sudo apt install yt-dlp ffmpeg

Uso:
    {program} URL [start_sec] [duration_sec] [output.gif]

Esempio:
    {program} https://youtu.be/kX8hfK0PrHM 10 5 clip.gif",
    error_label: "ERROR:",
    tool_not_found: "'{tool}' non trovato. Installa con: {install}",
    command_failed: "comando fallito: {command} (rc={code})",
    workspace_failed: "impossibile creare la directory temporanea: {reason}",
    interrupted: "interrotto, file temporanei rimossi",
    missing_url: "argomento obbligatorio mancante: URL",
    saved: "✔ GIF salvata in: {path}",
};

static FRENCH: Catalog = Catalog {
    language: Language::French,
    usage: "\
{program}

Télécharger une vidéo YouTube et la convertir en GIF en n'utilisant que yt-dlp et ffmpeg.
Dépendances système (installez-les si vous ne les avez pas) :
    sudo apt install yt-dlp ffmpeg

Utilisation :
    {program} URL [start_sec] [duration_sec] [output.gif]

Exemple :
    {program} https://youtu.be/kX8hfK0PrHM 10 5 clip.gif",
    error_label: "ERREUR :",
    tool_not_found: "'{tool}' introuvable. Installez avec : {install}",
    command_failed: "commande échouée : {command} (rc={code})",
    workspace_failed: "impossible de créer le répertoire temporaire : {reason}",
    interrupted: "interrompu, fichiers temporaires supprimés",
    missing_url: "argument obligatoire manquant : URL",
    saved: "✔ GIF enregistré sous : {path}",
};

static GERMAN: Catalog = Catalog {
    language: Language::German,
    usage: "\
{program}

Lädt ein YouTube-Video herunter und wandelt es mit yt-dlp und ffmpeg in ein GIF um.
Systemabhängigkeiten (bei Bedarf installieren):
    sudo apt install yt-dlp ffmpeg

Verwendung:
    {program} URL [start_sec] [duration_sec] [output.gif]

Beispiel:
    {program} https://youtu.be/kX8hfK0PrHM 10 5 clip.gif",
    error_label: "FEHLER:",
    tool_not_found: "'{tool}' nicht gefunden. Installiere mit: {install}",
    command_failed: "Befehl fehlgeschlagen: {command} (rc={code})",
    workspace_failed: "temporäres Verzeichnis konnte nicht erstellt werden: {reason}",
    interrupted: "abgebrochen, temporäre Dateien entfernt",
    missing_url: "erforderliches Argument fehlt: URL",
    saved: "✔ GIF gespeichert unter: {path}",
};

static PORTUGUESE: Catalog = Catalog {
    language: Language::Portuguese,
    usage: "\
{program}

Baixa um vídeo do YouTube e o converte em um GIF usando apenas yt-dlp e ffmpeg.
Dependências do sistema (instale se não as tiver):
    sudo apt install yt-dlp ffmpeg

Uso:
    {program} URL [start_sec] [duration_sec] [output.gif]

Exemplo:
    {program} https://youtu.be/kX8hfK0PrHM 10 5 clip.gif",
    error_label: "ERRO:",
    tool_not_found: "'{tool}' não encontrado. Instale com: {install}",
    command_failed: "comando falhou: {command} (rc={code})",
    workspace_failed: "não foi possível criar o diretório temporário: {reason}",
    interrupted: "interrompido, arquivos temporários removidos",
    missing_url: "argumento obrigatório ausente: URL",
    saved: "✔ GIF salvo em: {path}",
};

static CHINESE: Catalog = Catalog {
    language: Language::Chinese,
    usage: "\
{program}

下载 YouTube 视频并使用 yt-dlp 和 ffmpeg 将其转换为 GIF。
系统依赖（如果没有请安装）：
    sudo apt install yt-dlp ffmpeg

用法：
    {program} URL [start_sec] [duration_sec] [output.gif]

示例：
    {program} https://youtu.be/kX8hfK0PrHM 10 5 clip.gif",
    error_label: "错误：",
    tool_not_found: "未找到 '{tool}'。请安装：{install}",
    command_failed: "命令失败：{command} (返回码 {code})",
    workspace_failed: "无法创建临时目录：{reason}",
    interrupted: "已中断，临时文件已删除",
    missing_url: "缺少必需参数：URL",
    saved: "✔ GIF 已保存至：{path}",
};

static JAPANESE: Catalog = Catalog {
    language: Language::Japanese,
    usage: "\
{program}

YouTubeの動画をダウンロードし、yt-dlpとffmpegのみを使用してGIFに変換します。
システム依存関係（インストールされていない場合は実行）：
    sudo apt install yt-dlp ffmpeg

使用法：
    {program} URL [start_sec] [duration_sec] [output.gif]

例：
    {program} https://youtu.be/kX8hfK0PrHM 10 5 clip.gif",
    error_label: "エラー：",
    tool_not_found: "コマンド '{tool}' が見つかりません。次を実行してインストールしてください：{install}",
    command_failed: "コマンド失敗：{command} (終了コード={code})",
    workspace_failed: "一時ディレクトリを作成できません：{reason}",
    interrupted: "中断されました。一時ファイルを削除しました",
    missing_url: "必須引数がありません：URL",
    saved: "✔ GIFを保存しました：{path}",
};

// Spanish and Russian are accepted selectors without a translation.
pub(super) static ALL: [&Catalog; 7] = [
    &ENGLISH,
    &ITALIAN,
    &FRENCH,
    &GERMAN,
    &PORTUGUESE,
    &CHINESE,
    &JAPANESE,
];
