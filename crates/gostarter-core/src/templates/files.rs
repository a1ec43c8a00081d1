//! Template file contents
//!
//! Every constant here is written to disk as is, except for the module path marker.

/// `internal/config/config.go`
pub const CONFIG_GO: &str = r#"package config

type Config struct{}

func LoadConfig() *Config {
	return &Config{}
}
"#;

/// `pkg/utils/logger.go` (Echo with logging middleware only)
pub const LOGGER_GO: &str = r#"package utils

import (
	"fmt"
	"time"

	"github.com/labstack/echo/v4"
)

const (
	colorRed       = "\033[31m"
	colorGreen     = "\033[32m"
	colorYellow    = "\033[33m"
	colorBlue      = "\033[34m"
	colorPurple    = "\033[35m"
	colorCyan      = "\033[36m"
	colorGray      = "\033[37m"
	colorReset     = "\033[0m"
	colorLightCyan = "\033[96m"
	colorMagenta   = "\033[35m"
	styleBold      = "\033[1m"
)

// statusColor returns the ANSI color for an HTTP status code.
func statusColor(code int) string {
	switch {
	case code >= 100 && code < 200:
		return colorYellow
	case code >= 200 && code < 300:
		return colorGreen
	case code >= 300 && code < 400:
		return colorBlue
	case code >= 400 && code < 500:
		return colorRed
	case code >= 500:
		return colorPurple
	default:
		return colorReset
	}
}

// CustomLogger logs every request with a color-coded status.
func CustomLogger() echo.MiddlewareFunc {
	return func(next echo.HandlerFunc) echo.HandlerFunc {
		return func(c echo.Context) error {
			start := time.Now()

			if err := next(c); err != nil {
				c.Error(err)
			}

			req := c.Request()
			res := c.Response()

			id := req.Header.Get(echo.HeaderXRequestID)
			if id == "" {
				id = res.Header().Get(echo.HeaderXRequestID)
			}

			fmt.Printf("%s[%s]%s %s%s%s%s %s%s%s %s%s%d%s %s%v%s %s\n",
				colorLightCyan, time.Now().Format("2006-01-02 15:04:05"), colorReset,
				styleBold, colorGray, req.Method, colorReset,
				colorCyan, req.URL.Path, colorReset,
				styleBold, statusColor(res.Status), res.Status, colorReset,
				colorGray, time.Since(start), colorReset,
				id,
			)

			return nil
		}
	}
}

// FetchLogger prints a timestamped marker after a periodic fetch completes.
func FetchLogger() {
	fmt.Printf("%s[%s]%s %s%s%s%s\n",
		colorLightCyan, time.Now().Format("2006-01-02 15:04:05"), colorReset,
		styleBold, colorMagenta, "API FETCHED", colorReset,
	)
}
"#;

/// `cmd/main.go` for net/http
pub const MAIN_STDLIB: &str = r#"package main

import (
	"fmt"
	"net/http"
)

func main() {
	mux := http.NewServeMux()

	mux.HandleFunc("/", func(w http.ResponseWriter, r *http.Request) {
		fmt.Fprintln(w, "Works")
	})

	fmt.Println("Server is running at http://localhost:8080")
	if err := http.ListenAndServe(":8080", mux); err != nil {
		fmt.Println("Error starting server:", err)
	}
}
"#;

/// `cmd/main.go` for Gin
pub const MAIN_GIN: &str = r#"package main

import "github.com/gin-gonic/gin"

func main() {
	r := gin.Default()
	r.GET("/ping", func(c *gin.Context) {
		c.JSON(200, gin.H{
			"message": "works",
		})
	})
	r.Run(":8080")
}
"#;

/// `cmd/main.go` for Echo
pub const MAIN_ECHO: &str = r#"package main

import (
	"net/http"

	"github.com/labstack/echo/v4"
)

func main() {
	e := echo.New()
	e.GET("/", func(c echo.Context) error {
		return c.String(http.StatusOK, "Hello, World!")
	})
	e.Logger.Fatal(e.Start(":8080"))
}
"#;

/// `cmd/main.go` for Echo wired to `utils.CustomLogger`
///
/// Imports `pkg/utils` through the module path marker.
pub const MAIN_ECHO_WITH_LOGGER: &str = r#"package main

import (
	"net/http"

	"github.com/labstack/echo/v4"
	"{{module}}/pkg/utils"
)

func main() {
	e := echo.New()
	e.HideBanner = true
	e.Use(utils.CustomLogger())
	e.GET("/", func(c echo.Context) error {
		return c.String(http.StatusOK, "Hello, World!")
	})
	e.Logger.Fatal(e.Start(":8080"))
}
"#;

/// `cmd/main.go` for Fiber
pub const MAIN_FIBER: &str = r#"package main

import (
	"log"

	"github.com/gofiber/fiber/v2"
)

func main() {
	app := fiber.New()

	app.Get("/", func(c *fiber.Ctx) error {
		return c.SendString("works")
	})

	log.Fatal(app.Listen(":8080"))
}
"#;

/// `cmd/main.go` for chi
pub const MAIN_CHI: &str = r#"package main

import (
	"net/http"

	"github.com/go-chi/chi/v5"
	"github.com/go-chi/chi/v5/middleware"
)

func main() {
	r := chi.NewRouter()
	r.Use(middleware.Logger)
	r.Get("/", func(w http.ResponseWriter, r *http.Request) {
		w.Write([]byte("works"))
	})
	http.ListenAndServe(":8080", r)
}
"#;

/// `internal/adapters/repository/db.go` for SQLite (gorm)
pub const DB_SQLITE: &str = r#"package repository

import (
	"gorm.io/driver/sqlite"
	"gorm.io/gorm"
)

type SQLiteStore struct {
	db *gorm.DB
}

// NewStore opens a SQLite database at the given path.
func NewStore(connectionString string) (*SQLiteStore, error) {
	db, err := gorm.Open(sqlite.Open(connectionString), &gorm.Config{})
	if err != nil {
		return nil, err
	}
	return &SQLiteStore{
		db: db,
	}, nil
}
"#;

/// `internal/adapters/repository/db.go` for PostgreSQL (gorm)
pub const DB_POSTGRESQL: &str = r#"package repository

import (
	"gorm.io/driver/postgres"
	"gorm.io/gorm"
)

type PGStore struct {
	db *gorm.DB
}

// NewStore connects using a DSN such as
// "host=localhost user=postgres dbname=postgres port=5432 sslmode=disable".
func NewStore(dsn string) (*PGStore, error) {
	db, err := gorm.Open(postgres.Open(dsn), &gorm.Config{})
	if err != nil {
		return nil, err
	}
	return &PGStore{
		db: db,
	}, nil
}
"#;

/// `internal/adapters/repository/db.go` for MongoDB
pub const DB_MONGODB: &str = r#"package repository

import (
	"context"
	"fmt"
	"time"

	"go.mongodb.org/mongo-driver/mongo"
	"go.mongodb.org/mongo-driver/mongo/options"
)

type MongoStore struct {
	client *mongo.Client
	db     *mongo.Database
}

func NewMongoStore(dsn string, dbName string) (*MongoStore, error) {
	clientOptions := options.Client().ApplyURI(dsn)
	client, err := mongo.Connect(context.TODO(), clientOptions)
	if err != nil {
		return nil, err
	}

	if err := client.Ping(context.TODO(), nil); err != nil {
		return nil, fmt.Errorf("failed to connect to MongoDB: %w", err)
	}

	return &MongoStore{
		client: client,
		db:     client.Database(dbName),
	}, nil
}

func (store *MongoStore) Close() error {
	ctx, cancel := context.WithTimeout(context.Background(), 10*time.Second)
	defer cancel()
	return store.client.Disconnect(ctx)
}
"#;
